//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// use user_crud_api::api::extractors::ValidatedJson;
/// use user_crud_api::domain::UserInput;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserInput>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| validation_error(&e))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a single client-facing error.
///
/// Messages are ordered by field name so the response is deterministic.
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    let message = fields
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ");

    AppError::validation(message)
}
