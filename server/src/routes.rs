use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use writing::TransformMode;

use crate::{completion, error::AppError, mail, state};

#[derive(Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct Rewritten {
    pub rewritten: String,
}

pub async fn rewrite_handler(
    State(state): State<Arc<state::State>>,
    Json(payload): Json<TextPayload>,
) -> Result<Json<Rewritten>, AppError> {
    let rewritten = completion::transform(&state, TransformMode::Professional, &payload.text).await?;

    Ok(Json(Rewritten { rewritten }))
}

pub async fn simplify_handler(
    State(state): State<Arc<state::State>>,
    Json(payload): Json<TextPayload>,
) -> Result<Json<Rewritten>, AppError> {
    let rewritten = completion::transform(&state, TransformMode::Simplify, &payload.text).await?;

    Ok(Json(Rewritten { rewritten }))
}

pub async fn contact_handler(
    State(state): State<Arc<state::State>>,
    Json(payload): Json<mail::ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    mail::send_contact(&state, &payload).await?;

    Ok(Json(json!({ "ok": true })))
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
