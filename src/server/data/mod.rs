//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees entities. All queries, inserts, updates and deletes go
//! through these repositories.

pub mod client;

#[cfg(test)]
mod test;
