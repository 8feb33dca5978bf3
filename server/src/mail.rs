//! Contact form relay.
//!
//! Turns a contact submission into one plain-text notification email and
//! hands it to the transactional email API. Nothing is stored.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::{
    error::{upstream_message, AppError},
    state::State,
};

const FROM: &str = "Simple Writing <onboarding@resend.dev>";

#[derive(Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub topic: Option<String>,
    pub message: String,
}

impl ContactPayload {
    fn topic_or(&self, fallback: &str) -> String {
        match self.topic.as_deref() {
            Some(topic) if !topic.trim().is_empty() => topic.to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub fn subject(payload: &ContactPayload) -> String {
    format!(
        "New message from {} ({})",
        payload.name,
        payload.topic_or("general")
    )
}

pub fn build_body(payload: &ContactPayload) -> String {
    format!(
        "New contact form submission from Simple Writing:\n\n\
Name: {}\n\
Email: {}\n\
Topic: {}\n\n\
Message:\n\
{}",
        payload.name,
        payload.email,
        payload.topic_or("(not specified)"),
        payload.message
    )
}

/// Validate the submission and relay it as an email.
pub async fn send_contact(state: &State, payload: &ContactPayload) -> Result<(), AppError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::MissingFields);
    }

    let response = state
        .http
        .post(format!("{}/emails", state.config.mail_url))
        .bearer_auth(&state.config.mail_key)
        .json(&json!({
            "from": FROM,
            "to": [state.config.contact_recipient],
            "subject": subject(payload),
            "text": build_body(payload),
        }))
        .send()
        .await?;

    let status = response.status();
    debug!("mail status: {status}");

    if !status.is_success() {
        let message = upstream_message(response)
            .await
            .unwrap_or_else(|| "Failed to send email.".to_string());
        warn!("mail upstream error ({status}): {message}");

        return Err(AppError::Upstream(message));
    }

    Ok(())
}
