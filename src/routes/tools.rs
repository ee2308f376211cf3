// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference data and stateless tools.

use crate::catalog::{self, ActivityEntry, CityProfile, WaterSource, ACTIVITIES, CITIES};
use crate::error::Result;
use crate::services::{convert, visual_impact, VisualImpact, VolumeUnit};
use crate::AppState;
use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/catalog/activities", get(get_activities))
        .route("/api/catalog/cities", get(get_cities))
        .route("/api/convert", get(get_conversion))
        .route("/api/cities/{city}/sources", get(get_water_sources))
}

async fn get_activities() -> Json<&'static [ActivityEntry]> {
    Json(ACTIVITIES)
}

async fn get_cities() -> Json<&'static [CityProfile]> {
    Json(CITIES)
}

#[derive(Deserialize)]
struct ConvertQuery {
    quantity: f64,
    from: String,
    to: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConvertResponse {
    pub quantity: f64,
    pub from: VolumeUnit,
    pub to: VolumeUnit,
    pub result: f64,
    /// Equivalences for the quantity expressed in liters
    pub impact: VisualImpact,
}

/// Convert a volume between units.
async fn get_conversion(Query(params): Query<ConvertQuery>) -> Result<Json<ConvertResponse>> {
    let from: VolumeUnit = params.from.parse()?;
    let to: VolumeUnit = params.to.parse()?;
    let liters = convert(params.quantity, from, VolumeUnit::Liter);

    Ok(Json(ConvertResponse {
        quantity: params.quantity,
        from,
        to,
        result: convert(params.quantity, from, to),
        impact: visual_impact(liters),
    }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WaterSourcesResponse {
    pub city: String,
    pub sources: Vec<WaterSource>,
}

/// Free or low-cost drinking water points in a city.
async fn get_water_sources(Path(city): Path<String>) -> Json<WaterSourcesResponse> {
    let sources = catalog::water_sources(&city).to_vec();
    Json(WaterSourcesResponse { city, sources })
}
