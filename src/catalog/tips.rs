// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Water-saving tips and the consumption tiers that select them.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A water-saving tip.
///
/// `potential_savings` is either a reduction factor (`<= 1`) or an absolute
/// number of liters saved per day (`> 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tip {
    pub id: u32,
    pub description: &'static str,
    pub potential_savings: f64,
    /// Activity the tip targets, or `None` for general consumption
    pub activity: Option<&'static str>,
}

const fn tip_entry(
    id: u32,
    description: &'static str,
    potential_savings: f64,
    activity: Option<&'static str>,
) -> Tip {
    Tip {
        id,
        description,
        potential_savings,
        activity,
    }
}

pub static TIPS: &[Tip] = &[
    tip_entry(
        1,
        "Cierra el grifo mientras te cepillas los dientes. Puedes ahorrar hasta 12 litros por minuto.",
        12.0,
        Some("brush_teeth"),
    ),
    tip_entry(
        2,
        "Instala cabezales de ducha de bajo flujo para reducir el consumo de agua hasta en un 50%.",
        0.5,
        Some("shower"),
    ),
    tip_entry(
        3,
        "Repara grifos que gotean. Un grifo que gotea puede desperdiciar hasta 20 litros al día.",
        20.0,
        None,
    ),
    tip_entry(
        4,
        "Lava los platos en una tina llena de agua en lugar de hacerlo con el grifo abierto.",
        0.6,
        Some("wash_dishes"),
    ),
    tip_entry(
        5,
        "Utiliza la lavadora sólo con carga completa para maximizar la eficiencia del agua.",
        0.3,
        Some("washing_machine"),
    ),
    tip_entry(
        6,
        "Recoge agua de lluvia para regar las plantas.",
        0.8,
        Some("water_plants"),
    ),
    tip_entry(
        7,
        "Toma duchas más cortas. Reducir tu ducha en 2 minutos puede ahorrar hasta 20 litros.",
        20.0,
        Some("shower"),
    ),
    tip_entry(
        8,
        "Utiliza un sistema de doble descarga en el inodoro para ahorrar agua en cada uso.",
        0.5,
        Some("toilet"),
    ),
    tip_entry(
        9,
        "No uses el inodoro como papelera. Cada descarga innecesaria gasta entre 6 y 10 litros.",
        8.0,
        Some("toilet"),
    ),
    tip_entry(
        10,
        "Lava frutas y verduras en un recipiente con agua en lugar de bajo el grifo corriente.",
        5.0,
        Some("cooking"),
    ),
];

pub fn tip(id: u32) -> Option<&'static Tip> {
    TIPS.iter().find(|t| t.id == id)
}

/// Consumption bucket that decides which tips are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ConsumptionTier {
    /// Below 50 L/day
    Low,
    /// 50 L/day up to (not including) 100 L/day
    Moderate,
    /// 100 L/day and above
    High,
}

impl ConsumptionTier {
    /// Tier for a daily consumption figure. Non-positive consumption has no tier.
    pub fn for_consumption(daily_liters: f64) -> Option<Self> {
        if daily_liters <= 0.0 || daily_liters.is_nan() {
            None
        } else if daily_liters < 50.0 {
            Some(ConsumptionTier::Low)
        } else if daily_liters < 100.0 {
            Some(ConsumptionTier::Moderate)
        } else {
            Some(ConsumptionTier::High)
        }
    }

    /// Tip ids eligible in this tier.
    ///
    /// These ids are coupled to [`TIPS`] by hand: adding, removing or
    /// renumbering a tip means revisiting this table.
    pub fn tip_ids(self) -> &'static [u32] {
        match self {
            ConsumptionTier::Low => &[3, 6, 10],
            ConsumptionTier::Moderate => &[1, 4, 5, 8, 10],
            ConsumptionTier::High => &[2, 5, 7, 8, 9],
        }
    }

    pub fn tips(self) -> impl Iterator<Item = &'static Tip> {
        self.tip_ids().iter().filter_map(|id| tip(*id))
    }
}
