// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Household activities and their liters-per-use coefficients.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A water-using (or water-saving) activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityEntry {
    /// Stable identifier used in stored records
    pub key: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Liters per occurrence. Negative for savings actions such as repairs.
    pub liters_per_use: f64,
    pub description: &'static str,
}

const fn entry(
    key: &'static str,
    display_name: &'static str,
    liters_per_use: f64,
    description: &'static str,
) -> ActivityEntry {
    ActivityEntry {
        key,
        display_name,
        liters_per_use,
        description,
    }
}

pub static ACTIVITIES: &[ActivityEntry] = &[
    entry("shower", "Ducharse", 70.0, "Ducha de aproximadamente 7 minutos"),
    entry("bath", "Tomar un baño de tina", 150.0, "Llenar una bañera estándar"),
    entry("toilet", "Usar el inodoro", 9.0, "Cada descarga del inodoro"),
    entry(
        "brush_teeth",
        "Cepillarse los dientes",
        10.0,
        "Cepillado de dientes con grifo abierto",
    ),
    entry(
        "wash_hands",
        "Lavarse las manos",
        3.0,
        "Lavado de manos con el grifo abierto",
    ),
    entry(
        "wash_dishes_by_hand",
        "Lavar platos a mano",
        20.0,
        "Lavar platos para 4 personas con el grifo abierto",
    ),
    entry("dishwasher", "Usar lavavajillas", 15.0, "Ciclo estándar de lavavajillas"),
    entry("washing_machine", "Usar lavadora", 60.0, "Ciclo de lavado completo"),
    entry(
        "cooking",
        "Cocinar",
        10.0,
        "Preparación de comidas y limpieza de alimentos",
    ),
    entry(
        "water_plants",
        "Regar plantas",
        15.0,
        "Riego de plantas interiores o pequeño jardín",
    ),
    entry("drink_water", "Beber agua", 2.0, "Consumo personal diario recomendado"),
    entry("car_wash", "Lavar el auto", 150.0, "Lavado de auto con manguera"),
    entry("mop_floor", "Trapear pisos", 15.0, "Limpieza de pisos de una casa pequeña"),
    entry("laundry_by_hand", "Lavar ropa a mano", 30.0, "Lavado manual de ropa"),
    entry("face_wash", "Lavarse la cara", 5.0, "Lavado de cara con grifo abierto"),
    entry("shave", "Afeitarse", 7.0, "Afeitado con grifo abierto"),
    entry(
        "leak_repair",
        "Reparar una fuga",
        -20.0,
        "Reparar un grifo o tubería con fuga",
    ),
    entry("water_lawn", "Regar el césped/jardín", 35.0, "Riego de jardín pequeño"),
    entry("clean_bathroom", "Limpiar el baño", 12.0, "Limpieza completa de un baño"),
    entry("wash_pet", "Bañar mascota", 30.0, "Baño para perro o gato"),
    entry("wash_bike", "Lavar bicicleta/moto", 25.0, "Limpieza de bicicleta o moto"),
];

/// Look up an activity by key.
pub fn activity(key: &str) -> Option<&'static ActivityEntry> {
    ACTIVITIES.iter().find(|a| a.key == key)
}
