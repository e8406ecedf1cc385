//! Request input checks.
//!
//! Handlers run these before touching the store, so a rejected request
//! never reaches the database.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Return the value of a required query parameter.
///
/// `None` and the empty string are both treated as absent, matching how
/// query strings like `?theme_id=` are sent by the exhibit clients.
pub fn require_param(name: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!(
            "{name} query parameter is required"
        ))),
    }
}

/// Run the `validator` rules of a request payload and fold any failure into
/// a single [`CoreError::Validation`] naming the offending fields.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    match fields.as_slice() {
        [] => "invalid request body".to_string(),
        [one] => format!("{one} is required"),
        many => format!("{} are required", many.join(" and ")),
    }
}
