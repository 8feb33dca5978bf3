//! Contact form: client-side required-field check, then one POST.

use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiError, HttpApi};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Please fill out Name, Email, and Message.")]
    MissingFields,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactError::MissingFields);
        }

        Ok(())
    }
}

/// Validate locally, then submit. Invalid forms never reach the network.
pub async fn submit(api: &HttpApi, form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    api.send_contact(form).await?;

    Ok(())
}
