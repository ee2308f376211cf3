// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! City tariffs and average consumption.
//!
//! Tariffs are in soles per cubic meter (SUNASS domestic category);
//! averages are liters per person per day.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Tariff used for cities missing from [`CITIES`].
pub const DEFAULT_TARIFF_PER_CUBIC_METER: f64 = 2.20;

/// National average consumption, liters per person per day.
pub const NATIONAL_AVG_CONSUMPTION_LITERS: f64 = 145.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CityProfile {
    pub city: &'static str,
    pub tariff_per_cubic_meter: f64,
    pub avg_daily_consumption_liters: f64,
}

const fn city(
    city: &'static str,
    tariff_per_cubic_meter: f64,
    avg_daily_consumption_liters: f64,
) -> CityProfile {
    CityProfile {
        city,
        tariff_per_cubic_meter,
        avg_daily_consumption_liters,
    }
}

pub static CITIES: &[CityProfile] = &[
    city("Lima", 3.26, 163.0),
    city("Arequipa", 2.40, 145.0),
    city("Trujillo", 2.20, 158.0),
    city("Chiclayo", 2.15, 152.0),
    city("Piura", 2.30, 149.0),
    city("Iquitos", 1.85, 135.0),
    city("Cusco", 2.10, 125.0),
    city("Huancayo", 1.95, 120.0),
    city("Tacna", 2.25, 140.0),
    city("Pucallpa", 1.80, 133.0),
    city("Chimbote", 2.05, 142.0),
    city("Juliaca", 1.75, 118.0),
    city("Ica", 2.35, 160.0),
    city("Cajamarca", 2.15, 122.0),
    city("Sullana", 2.25, 147.0),
    city("Ayacucho", 1.90, 115.0),
    city("Huánuco", 1.85, 119.0),
    city("Puno", 1.80, 116.0),
    city("Tarapoto", 1.95, 130.0),
    city("Tumbes", 2.20, 155.0),
];

pub fn city_profile(name: &str) -> Option<&'static CityProfile> {
    CITIES.iter().find(|c| c.city == name)
}

/// Tariff for a city, falling back to the default tariff.
pub fn tariff_for(name: &str) -> f64 {
    city_profile(name)
        .map(|c| c.tariff_per_cubic_meter)
        .unwrap_or(DEFAULT_TARIFF_PER_CUBIC_METER)
}

/// Average daily consumption for a city, falling back to the national average.
pub fn city_average(name: &str) -> f64 {
    city_profile(name)
        .map(|c| c.avg_daily_consumption_liters)
        .unwrap_or(NATIONAL_AVG_CONSUMPTION_LITERS)
}

/// Free or low-cost public water point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WaterSource {
    pub name: &'static str,
    pub address: &'static str,
    pub kind: SourceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SourceKind {
    Free,
    LowCost,
}

const fn source(name: &'static str, address: &'static str, kind: SourceKind) -> WaterSource {
    WaterSource {
        name,
        address,
        kind,
    }
}

static LIMA_SOURCES: &[WaterSource] = &[
    source(
        "Punto de agua ANA",
        "Av. República de Panamá 3636, San Isidro",
        SourceKind::Free,
    ),
    source("Sedapal - Atarjea", "El Agustino", SourceKind::LowCost),
    source("Pileta Municipal Miraflores", "Parque Kennedy", SourceKind::Free),
];

static AREQUIPA_SOURCES: &[WaterSource] = &[
    source(
        "Sedapar - La Tomilla",
        "Via de Evitamiento km 7",
        SourceKind::LowCost,
    ),
    source("Plaza de Armas", "Centro Histórico", SourceKind::Free),
];

static TRUJILLO_SOURCES: &[WaterSource] = &[
    source(
        "Sedalib - Planta Alto Moche",
        "Carretera Panamericana Norte km 570",
        SourceKind::LowCost,
    ),
    source("Plaza Mayor", "Centro Histórico", SourceKind::Free),
];

static CUSCO_SOURCES: &[WaterSource] = &[
    source("Sedacusco - Planta Santa Ana", "Av. Ejército", SourceKind::LowCost),
    source("Pileta Plaza de Armas", "Centro Histórico", SourceKind::Free),
];

/// Known public water points in a city (empty when none are listed).
pub fn water_sources(name: &str) -> &'static [WaterSource] {
    match name {
        "Lima" => LIMA_SOURCES,
        "Arequipa" => AREQUIPA_SOURCES,
        "Trujillo" => TRUJILLO_SOURCES,
        "Cusco" => CUSCO_SOURCES,
        _ => &[],
    }
}
