use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body for not-found, bad-request and internal errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    #[serde(rename = "campo")]
    pub field: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// Body returned when a request fails validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    #[serde(rename = "errores")]
    pub errors: Vec<FieldErrorDto>,
}

/// Body returned when the data store rejects an operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataAccessErrorDto {
    #[serde(rename = "errorGrave")]
    pub error: String,
}
