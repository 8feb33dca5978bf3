use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No text provided")]
    EmptyText,

    #[error("Missing required fields.")]
    MissingFields,

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyText | AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if let AppError::Internal(ref e) = self {
            error!("upstream call failed: {e}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Error envelope both upstream APIs use: `{"error": {"message": …}}`.
#[derive(Deserialize)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub error: Option<UpstreamErrorDetail>,
}

#[derive(Deserialize)]
pub struct UpstreamErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull the upstream-supplied message out of a failed response body, if any.
pub async fn upstream_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<UpstreamErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
}
