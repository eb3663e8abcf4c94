//! Typed request bodies accepted by the API and the seed loader.

pub mod dates;
pub mod offers;
pub mod orders;
pub mod users;

use crate::error::{AppError, AppResult};

/// Field-level checks run on a payload after it has been deserialized.
///
/// Payloads with nothing beyond their types to check keep the default.
pub trait Validate {
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

pub(crate) fn ensure_present(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn ensure_max_len(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}
