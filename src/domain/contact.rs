// src/domain/contact.rs

use thiserror::Error;

const MAX_MESSAGE_CHARS: usize = 5000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Messages are limited to {} characters.", MAX_MESSAGE_CHARS)]
    TooLong,
}

/// A validated submission from the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Builds a message from decoded form pairs. Unknown keys are ignored.
    pub fn from_form<'a, I>(pairs: I) -> Result<Self, ContactError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (mut name, mut email, mut subject, mut message) = ("", "", "", "");
        for (key, value) in pairs {
            match key {
                "name" => name = value,
                "email" => email = value,
                "subject" => subject = value,
                "message" => message = value,
                _ => {}
            }
        }

        let name = required("name", name)?;
        let email = normalize_email(email)?;
        let subject = required("subject", subject)?;
        let message = required("message", message)?;

        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactError::TooLong);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ContactError::Missing(field));
    }
    Ok(v.to_string())
}

pub fn normalize_email(email: &str) -> Result<String, ContactError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() {
        return Err(ContactError::Missing("email"));
    }
    match e.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(e)
        }
        _ => Err(ContactError::InvalidEmail),
    }
}
