//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so neither SeaORM entities nor
//! wire types leak across layers.

pub mod client;
pub mod hotel;
pub mod pet;
pub mod validation;
