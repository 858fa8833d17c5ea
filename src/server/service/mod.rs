//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and pet ownership rules before anything is written
//! - **Orchestration**: Coordinating repository calls and the upload directory
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod client;
pub mod file;
