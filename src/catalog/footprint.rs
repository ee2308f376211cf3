// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Virtual water embedded in food and consumer goods.
//!
//! Food quantities are entered per week. Product quantities are entered in
//! the period each item is usually bought in (see [`ReportingPeriod`]); a
//! wrong period silently scales the footprint, so every product key is
//! pinned by a test below.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Unit that a footprint coefficient is expressed per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintUnit {
    PerKg,
    PerLiter,
    PerUnit,
    PerSheet,
    PerPair,
}

/// Category buckets for the food breakdown, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FoodCategory {
    #[serde(rename = "Carnes")]
    Meat,
    #[serde(rename = "Lácteos y huevos")]
    DairyAndEggs,
    #[serde(rename = "Cereales")]
    Grains,
    #[serde(rename = "Vegetales")]
    Vegetables,
    #[serde(rename = "Frutas")]
    Fruit,
    #[serde(rename = "Bebidas")]
    Beverages,
    #[serde(rename = "Otros")]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Meat,
        FoodCategory::DairyAndEggs,
        FoodCategory::Grains,
        FoodCategory::Vegetables,
        FoodCategory::Fruit,
        FoodCategory::Beverages,
        FoodCategory::Other,
    ];

    /// Label shown by the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Meat => "Carnes",
            FoodCategory::DairyAndEggs => "Lácteos y huevos",
            FoodCategory::Grains => "Cereales",
            FoodCategory::Vegetables => "Vegetales",
            FoodCategory::Fruit => "Frutas",
            FoodCategory::Beverages => "Bebidas",
            FoodCategory::Other => "Otros",
        }
    }

    /// Fixed key to category assignment. Unclassified keys fall into `Other`.
    pub fn of(food_key: &str) -> Self {
        match food_key {
            "carne_res" | "carne_pollo" | "carne_cerdo" => FoodCategory::Meat,
            "leche" | "queso" | "huevos" => FoodCategory::DairyAndEggs,
            "arroz" | "trigo" | "maiz" => FoodCategory::Grains,
            "papa" | "tomate" | "lechuga" => FoodCategory::Vegetables,
            "manzana" | "platano" => FoodCategory::Fruit,
            "cafe" | "cerveza" | "vino" => FoodCategory::Beverages,
            _ => FoodCategory::Other,
        }
    }
}

/// Food item with its water footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Liters of water per `unit`
    pub water_footprint_per_unit: f64,
    pub unit: FootprintUnit,
}

/// How often a product quantity is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingPeriod {
    Daily,
    Monthly,
    Annual,
}

impl ReportingPeriod {
    pub fn days(self) -> f64 {
        match self {
            ReportingPeriod::Daily => 1.0,
            ReportingPeriod::Monthly => 30.0,
            ReportingPeriod::Annual => 365.0,
        }
    }
}

/// Consumer product with its water footprint and reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductEntry {
    #[serde(flatten)]
    pub footprint: FootprintEntry,
    pub period: ReportingPeriod,
}

const fn food(
    key: &'static str,
    display_name: &'static str,
    water_footprint_per_unit: f64,
    unit: FootprintUnit,
) -> FootprintEntry {
    FootprintEntry {
        key,
        display_name,
        water_footprint_per_unit,
        unit,
    }
}

const fn product(
    key: &'static str,
    display_name: &'static str,
    water_footprint_per_unit: f64,
    unit: FootprintUnit,
    period: ReportingPeriod,
) -> ProductEntry {
    ProductEntry {
        footprint: food(key, display_name, water_footprint_per_unit, unit),
        period,
    }
}

use FootprintUnit::{PerKg, PerLiter, PerPair, PerSheet, PerUnit};

pub static FOOD_ITEMS: &[FootprintEntry] = &[
    food("carne_res", "Carne de res", 15400.0, PerKg),
    food("carne_pollo", "Carne de pollo", 4325.0, PerKg),
    food("carne_cerdo", "Carne de cerdo", 5988.0, PerKg),
    food("arroz", "Arroz", 3400.0, PerKg),
    food("papa", "Papa", 290.0, PerKg),
    food("maiz", "Maíz", 1222.0, PerKg),
    food("trigo", "Pan/Trigo", 1608.0, PerKg),
    food("leche", "Leche", 1020.0, PerLiter),
    food("queso", "Queso", 5060.0, PerKg),
    food("huevos", "Huevos", 3300.0, PerKg),
    food("tomate", "Tomate", 214.0, PerKg),
    food("lechuga", "Lechuga", 237.0, PerKg),
    food("manzana", "Manzana", 822.0, PerKg),
    food("platano", "Plátano/Banana", 790.0, PerKg),
    food("cafe", "Café", 18900.0, PerKg),
    food("chocolate", "Chocolate", 17196.0, PerKg),
    food("azucar", "Azúcar", 1782.0, PerKg),
    food("aceite_oliva", "Aceite de oliva", 14431.0, PerLiter),
    food("cerveza", "Cerveza", 298.0, PerLiter),
    food("vino", "Vino", 869.0, PerLiter),
];

pub static PRODUCT_ITEMS: &[ProductEntry] = &[
    product(
        "camiseta_algodon",
        "Camiseta de algodón",
        2700.0,
        PerUnit,
        ReportingPeriod::Monthly,
    ),
    product("jeans", "Jeans/pantalón", 8000.0, PerUnit, ReportingPeriod::Monthly),
    product(
        "zapatos_cuero",
        "Zapatos de cuero",
        8000.0,
        PerPair,
        ReportingPeriod::Monthly,
    ),
    product("papel", "Papel (hoja A4)", 10.0, PerSheet, ReportingPeriod::Daily),
    product("smartphone", "Smartphone", 13000.0, PerUnit, ReportingPeriod::Annual),
    product(
        "computadora",
        "Computadora/Laptop",
        20000.0,
        PerUnit,
        ReportingPeriod::Annual,
    ),
];

pub fn food_item(key: &str) -> Option<&'static FootprintEntry> {
    FOOD_ITEMS.iter().find(|f| f.key == key)
}

pub fn product_item(key: &str) -> Option<&'static ProductEntry> {
    PRODUCT_ITEMS.iter().find(|p| p.footprint.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_period() {
        let expected = [
            ("camiseta_algodon", ReportingPeriod::Monthly),
            ("jeans", ReportingPeriod::Monthly),
            ("zapatos_cuero", ReportingPeriod::Monthly),
            ("papel", ReportingPeriod::Daily),
            ("smartphone", ReportingPeriod::Annual),
            ("computadora", ReportingPeriod::Annual),
        ];
        assert_eq!(PRODUCT_ITEMS.len(), expected.len());
        for (key, period) in expected {
            let item = product_item(key).unwrap_or_else(|| panic!("missing product {key}"));
            assert_eq!(item.period, period, "period for {key}");
        }
    }

    #[test]
    fn test_period_days() {
        assert_eq!(ReportingPeriod::Daily.days(), 1.0);
        assert_eq!(ReportingPeriod::Monthly.days(), 30.0);
        assert_eq!(ReportingPeriod::Annual.days(), 365.0);
    }

    #[test]
    fn test_categories() {
        assert_eq!(FoodCategory::of("carne_res"), FoodCategory::Meat);
        assert_eq!(FoodCategory::of("huevos"), FoodCategory::DairyAndEggs);
        assert_eq!(FoodCategory::of("maiz"), FoodCategory::Grains);
        assert_eq!(FoodCategory::of("lechuga"), FoodCategory::Vegetables);
        assert_eq!(FoodCategory::of("platano"), FoodCategory::Fruit);
        assert_eq!(FoodCategory::of("vino"), FoodCategory::Beverages);
        assert_eq!(FoodCategory::of("chocolate"), FoodCategory::Other);
        assert_eq!(FoodCategory::of("aceite_oliva"), FoodCategory::Other);
    }

    #[test]
    fn test_category_labels_serialize() {
        let json = serde_json::to_string(&FoodCategory::DairyAndEggs).unwrap();
        assert_eq!(json, "\"Lácteos y huevos\"");
        for category in FoodCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_food_lookup() {
        assert_eq!(
            food_item("carne_res").map(|f| f.water_footprint_per_unit),
            Some(15400.0)
        );
        assert_eq!(food_item("leche").map(|f| f.unit), Some(FootprintUnit::PerLiter));
        assert!(food_item("quinua").is_none());
        assert_eq!(FOOD_ITEMS.len(), 20);
    }
}
