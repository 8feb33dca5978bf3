//! HTTP client for the backend API.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use writing::TransformMode;

use crate::contact::ContactForm;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status; the message comes from
    /// its `error` field when present.
    #[error("{message}")]
    Rejected { message: String },

    #[error("Network error, please try again later.")]
    Transport(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct TransformResponse {
    #[serde(default)]
    rewritten: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// Seam between the workflow and the transport, so tests can swap in a
/// canned implementation.
pub trait TransformApi {
    fn transform(
        &self,
        mode: TransformMode,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
}

pub struct HttpApi {
    base: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Submit the contact form. Field validation happens in
    /// [`crate::contact`] before this is called.
    pub async fn send_contact(&self, form: &ContactForm) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.base))
            .json(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let body: ErrorResponse = response.json().await.unwrap_or(ErrorResponse { error: None });
            return Err(ApiError::Rejected {
                message: body
                    .error
                    .unwrap_or_else(|| "Something went wrong. Please try again.".to_string()),
            });
        }

        Ok(())
    }
}

impl TransformApi for HttpApi {
    async fn transform(&self, mode: TransformMode, text: &str) -> Result<String, ApiError> {
        let (endpoint, fallback) = match mode {
            TransformMode::Professional => ("/api/rewrite", "Rewrite failed"),
            TransformMode::Simplify => ("/api/simplify", "Simplify failed"),
        };

        let response = self
            .http
            .post(format!("{}{endpoint}", self.base))
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        let body: TransformResponse = response.json().await?;

        if !status.is_success() {
            return Err(ApiError::Rejected {
                message: body.error.unwrap_or_else(|| fallback.to_string()),
            });
        }

        Ok(body.rewritten.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, HttpApi, TransformApi};
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };
    use writing::TransformMode;

    #[tokio::test]
    async fn transform_returns_rewritten_field() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rewrite"))
            .and(body_json(json!({ "text": "raw input" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "rewritten": "clean output" })),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let api = HttpApi::new(backend.uri());
        let text = api
            .transform(TransformMode::Professional, "raw input")
            .await
            .unwrap();

        assert_eq!(text, "clean output");
    }

    #[tokio::test]
    async fn transform_missing_field_is_empty_string() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/simplify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&backend)
            .await;

        let api = HttpApi::new(backend.uri());
        let text = api.transform(TransformMode::Simplify, "raw").await.unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn transform_surfaces_backend_error_message() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rewrite"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "rate limited" })),
            )
            .mount(&backend)
            .await;

        let api = HttpApi::new(backend.uri());
        let err = api
            .transform(TransformMode::Professional, "raw")
            .await
            .unwrap_err();

        match err {
            ApiError::Rejected { message } => assert_eq!(message, "rate limited"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transform_falls_back_to_generic_message() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/simplify"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .mount(&backend)
            .await;

        let api = HttpApi::new(backend.uri());
        let err = api
            .transform(TransformMode::Simplify, "raw")
            .await
            .unwrap_err();

        match err {
            ApiError::Rejected { message } => assert_eq!(message, "Simplify failed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
