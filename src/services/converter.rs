// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volume unit conversion and everyday equivalences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Volume units accepted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum VolumeUnit {
    Liter,
    CubicMeter,
    UsGallon,
    Bottle,
    Shower,
    ToiletFlush,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 6] = [
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
        VolumeUnit::UsGallon,
        VolumeUnit::Bottle,
        VolumeUnit::Shower,
        VolumeUnit::ToiletFlush,
    ];

    /// Liters in one of this unit.
    pub fn liters(self) -> f64 {
        match self {
            VolumeUnit::Liter => 1.0,
            VolumeUnit::CubicMeter => 1000.0,
            VolumeUnit::UsGallon => 3.78541,
            VolumeUnit::Bottle => 0.5,
            VolumeUnit::Shower => 70.0,
            VolumeUnit::ToiletFlush => 9.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "liter",
            VolumeUnit::CubicMeter => "cubic_meter",
            VolumeUnit::UsGallon => "us_gallon",
            VolumeUnit::Bottle => "bottle",
            VolumeUnit::Shower => "shower",
            VolumeUnit::ToiletFlush => "toilet_flush",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown volume unit: {0}")]
    UnknownUnit(String),
}

impl FromStr for VolumeUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        let unit = match normalized.as_str() {
            "l" | "liter" | "liters" | "litre" | "litres" | "litro" | "litros" => {
                VolumeUnit::Liter
            }
            "m3" | "cubic_meter" | "cubic_meters" | "metro_cubico" | "metros_cubicos" => {
                VolumeUnit::CubicMeter
            }
            "gal" | "gallon" | "gallons" | "us_gallon" | "us_gallons" | "galon" | "galones" => {
                VolumeUnit::UsGallon
            }
            "bottle" | "bottles" | "botella" | "botellas" => VolumeUnit::Bottle,
            "shower" | "showers" | "ducha" | "duchas" => VolumeUnit::Shower,
            "toilet" | "toilet_flush" | "toilet_flushes" | "flush" | "descarga" | "descargas" => {
                VolumeUnit::ToiletFlush
            }
            _ => return Err(ConvertError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// Convert `quantity` between volume units.
pub fn convert(quantity: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return quantity;
    }
    quantity * from.liters() / to.liters()
}

/// How a volume of water looks in everyday terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct VisualImpact {
    pub bottles: i64,
    pub showers: i64,
    pub toilets: i64,
    pub plants: i64,
    pub elephants: i64,
    pub swimming_pool_fraction: f64,
    pub days_for_one_person: f64,
}

const LITERS_PER_BOTTLE: f64 = 0.5;
const LITERS_PER_SHOWER: f64 = 70.0;
const LITERS_PER_FLUSH: f64 = 9.0;
const LITERS_PER_PLANT: f64 = 2.0;
const LITERS_PER_ELEPHANT: f64 = 150.0;
const LITERS_PER_POOL: f64 = 50_000.0;
const LITERS_PER_PERSON_DAY: f64 = 100.0;

/// Equivalence counts for `liters`. Counts are truncated toward zero.
pub fn visual_impact(liters: f64) -> VisualImpact {
    let count = |per: f64| (liters / per).trunc() as i64;
    VisualImpact {
        bottles: count(LITERS_PER_BOTTLE),
        showers: count(LITERS_PER_SHOWER),
        toilets: count(LITERS_PER_FLUSH),
        plants: count(LITERS_PER_PLANT),
        elephants: count(LITERS_PER_ELEPHANT),
        swimming_pool_fraction: liters / LITERS_PER_POOL,
        days_for_one_person: liters / LITERS_PER_PERSON_DAY,
    }
}
