// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user consumption, tips and footprint routes.

use crate::error::{AppError, Result};
use crate::models::{ActivityQuantities, DailyTotal, RecordOutcome, WeeklySummary};
use crate::routes::run_blocking;
use crate::services::{
    compute_food_footprint, compute_product_footprint, footprint_advice, ConsumptionComparison,
    FoodFootprint, FootprintAdvice, FootprintBreakdown, TipRecommendation,
};
use crate::time_utils::today;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(register_user))
        .route("/api/users/{username}/consumption", post(record_consumption))
        .route("/api/users/{username}/consumption/daily", get(get_daily))
        .route("/api/users/{username}/consumption/weekly", get(get_weekly))
        .route("/api/users/{username}/consumption/history", get(get_history))
        .route("/api/users/{username}/export.csv", get(export_csv))
        .route("/api/users/{username}/comparison", get(get_comparison))
        .route("/api/users/{username}/tips", post(recommend_tip))
        .route("/api/users/{username}/footprint", post(calculate_footprint))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 64))]
    pub city: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegisterResponse {
    pub username: String,
    pub city: String,
    pub created: bool,
}

/// Register a user, or change the city of an existing one.
async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let request = RegisterRequest {
        username: body.username.trim().to_string(),
        city: body.city.trim().to_string(),
    };
    request.validate()?;

    let (username, city) = (request.username.clone(), request.city.clone());
    let created = run_blocking(move || state.ledger.register_user(&username, &city)).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(RegisterResponse {
            username: request.username,
            city: request.city,
            created,
        }),
    ))
}

// ─── Consumption ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordRequest {
    /// Activity key → number of uses
    pub activities: ActivityQuantities,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub outcome: RecordOutcome,
}

/// Add activities to today's ledger.
async fn record_consumption(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<RecordRequest>,
) -> Result<Json<RecordResponse>> {
    let date = today();
    let outcome = run_blocking(move || {
        state
            .ledger
            .record_consumption(&username, &body.activities, date)
    })
    .await?;

    Ok(Json(RecordResponse { date, outcome }))
}

#[derive(Deserialize)]
struct DateQuery {
    /// Reference date (YYYY-MM-DD); defaults to today
    date: Option<String>,
}

fn parse_date(raw: Option<&str>) -> Result<NaiveDate> {
    raw.map(|raw| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest("Invalid 'date' parameter: must be YYYY-MM-DD".to_string())
        })
    })
    .transpose()
    .map(|date| date.unwrap_or_else(today))
}

async fn get_daily(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(params): Query<DateQuery>,
) -> Result<Json<DailyTotal>> {
    let date = parse_date(params.date.as_deref())?;
    let liters = run_blocking(move || state.ledger.daily_total(&username, date)).await?;
    Ok(Json(DailyTotal { date, liters }))
}

async fn get_weekly(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(params): Query<DateQuery>,
) -> Result<Json<WeeklySummary>> {
    let date = parse_date(params.date.as_deref())?;
    let summary = run_blocking(move || state.ledger.weekly_summary(&username, date)).await?;
    Ok(Json(summary))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<DailyTotal>>> {
    let history = run_blocking(move || state.ledger.daily_history(&username)).await?;
    Ok(Json(history))
}

/// Download every recorded activity as CSV.
async fn export_csv(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let csv = run_blocking(move || state.ledger.export_csv(&username)).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"water_usage.csv\"",
            ),
        ],
        csv,
    ))
}

/// Trailing-week daily average against city and national figures.
async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ConsumptionComparison>> {
    let comparison = run_blocking(move || state.ledger.comparison(&username, today())).await?;
    Ok(Json(comparison))
}

// ─── Tips ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TipRequest {
    /// Daily liters to base the tip on; defaults to today's total
    pub daily_consumption: Option<f64>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TipResponse {
    pub daily_consumption: f64,
    /// Absent when there is no consumption to advise on
    pub recommendation: Option<TipRecommendation>,
}

/// Pick the next tip for a user.
async fn recommend_tip(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<TipRequest>,
) -> Result<Json<TipResponse>> {
    if body.daily_consumption.is_some_and(|liters| !liters.is_finite()) {
        return Err(AppError::BadRequest(
            "daily_consumption must be a finite number".to_string(),
        ));
    }

    let response = run_blocking(move || {
        let daily_consumption = match body.daily_consumption {
            Some(liters) => liters,
            None => state.ledger.daily_total(&username, today())?,
        };
        let mut rng = rand::thread_rng();
        let recommendation =
            state
                .tips
                .tip_recommendation(&username, daily_consumption, &mut rng)?;
        Ok(TipResponse {
            daily_consumption,
            recommendation,
        })
    })
    .await?;

    Ok(Json(response))
}

// ─── Footprint ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct FootprintRequest {
    /// Food key → weekly quantity (kg or L)
    #[serde(default)]
    pub food: BTreeMap<String, f64>,
    /// Product key → quantity per the product's reporting period
    #[serde(default)]
    pub products: BTreeMap<String, f64>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FootprintResponse {
    #[serde(flatten)]
    pub breakdown: FootprintBreakdown,
    pub food: FoodFootprint,
    pub advice: Vec<FootprintAdvice>,
}

fn check_quantities(field: &str, quantities: &BTreeMap<String, f64>) -> Result<()> {
    match quantities
        .iter()
        .find(|(_, q)| !q.is_finite() || **q < 0.0)
    {
        Some((key, q)) => Err(AppError::BadRequest(format!(
            "{}.{} must be a non-negative number, got {}",
            field, key, q
        ))),
        None => Ok(()),
    }
}

/// Total daily water footprint: direct use plus food and products.
async fn calculate_footprint(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<FootprintRequest>,
) -> Result<Json<FootprintResponse>> {
    check_quantities("food", &body.food)?;
    check_quantities("products", &body.products)?;

    let direct = {
        let username = username.clone();
        run_blocking(move || state.ledger.direct_daily_liters(&username, today())).await?
    };
    let food = compute_food_footprint(body.food.iter().map(|(k, q)| (k.as_str(), *q)));
    let product_daily =
        compute_product_footprint(body.products.iter().map(|(k, q)| (k.as_str(), *q)));

    tracing::debug!(
        username = %username,
        direct,
        food = food.total_daily_liters,
        products = product_daily,
        "Calculated footprint"
    );

    Ok(Json(FootprintResponse {
        breakdown: FootprintBreakdown::new(direct, &food, product_daily),
        advice: footprint_advice(&food, product_daily),
        food,
    }))
}
