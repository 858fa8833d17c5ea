//! SeaORM entities for the pet hotel schema.

pub mod prelude;

pub mod client;
pub mod hotel;
pub mod pet;
