// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge and quiz routes.

use crate::error::Result;
use crate::routes::run_blocking;
use crate::services::{AnswerFeedback, ChallengeBoard, QuizState};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{username}/challenges", get(get_challenges))
        .route(
            "/api/users/{username}/challenges/{id}/accept",
            post(accept_challenge),
        )
        .route(
            "/api/users/{username}/challenges/{id}/complete",
            post(complete_challenge),
        )
        .route("/api/users/{username}/quiz", get(get_quiz))
        .route("/api/users/{username}/quiz/start", post(start_quiz))
        .route("/api/users/{username}/quiz/answer", post(answer_quiz))
}

// ─── Challenges ──────────────────────────────────────────────

async fn get_challenges(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ChallengeBoard>> {
    Ok(Json(
        run_blocking(move || state.challenges.board(&username)).await?,
    ))
}

async fn accept_challenge(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, u32)>,
) -> Result<Json<ChallengeBoard>> {
    Ok(Json(
        run_blocking(move || state.challenges.accept(&username, id)).await?,
    ))
}

async fn complete_challenge(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, u32)>,
) -> Result<Json<ChallengeBoard>> {
    Ok(Json(
        run_blocking(move || state.challenges.complete(&username, id)).await?,
    ))
}

// ─── Quiz ────────────────────────────────────────────────────

async fn get_quiz(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<QuizState>> {
    Ok(Json(
        run_blocking(move || state.quiz.current(&username)).await?,
    ))
}

async fn start_quiz(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<QuizState>> {
    Ok(Json(
        run_blocking(move || state.quiz.start(&username)).await?,
    ))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    /// Text of the chosen option
    pub answer: String,
}

async fn answer_quiz(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<AnswerRequest>,
) -> Result<Json<AnswerFeedback>> {
    Ok(Json(
        run_blocking(move || state.quiz.answer(&username, &body.answer)).await?,
    ))
}
