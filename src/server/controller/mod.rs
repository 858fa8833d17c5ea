//! HTTP request handlers.
//!
//! Controllers convert between wire DTOs and domain models and delegate the work to
//! the service layer. Every handler returns `Result<_, AppError>` so failures are
//! rendered by `AppError::into_response`.

pub mod client;
