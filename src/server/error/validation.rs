use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

/// A single invalid request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Request body failed validation on one or more fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summary(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Validation error for a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}

/// Responds with 400 Bad Request, the summary as `error`, and each field message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let fields = self
            .fields
            .into_iter()
            .map(|f| FieldErrorDto {
                field: f.field,
                message: f.message,
            })
            .collect();

        (StatusCode::BAD_REQUEST, Json(ErrorDto { error, fields })).into_response()
    }
}
