use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email address is not valid")]
    InvalidEmail,
}

/// A contact-form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

fn required(field: &'static str, value: String) -> Result<String, MessageValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MessageValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl NewMessage {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, MessageValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let subject = required("subject", subject)?;
        let message = required("message", message)?;

        if !EmailAddress::is_valid(&email) {
            return Err(MessageValidationError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
