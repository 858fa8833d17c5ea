//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let hotel = factory::create_hotel(&db).await?;
//! let client = factory::client::ClientFactory::new(&db)
//!     .name("Laura")
//!     .hotel_id(hotel.id)
//!     .build()
//!     .await?;
//! let pet = factory::create_pet(&db, client.id).await?;
//!
//! // Or everything at once
//! let (hotel, client, pets) = factory::helpers::create_client_with_dependencies(&db, 2).await?;
//! ```
//!
//! # Available Factories
//!
//! - `hotel` - Create hotel entities
//! - `client` - Create client entities
//! - `pet` - Create pet entities
//! - `helpers` - Unique id generation and whole-graph creation

pub mod client;
pub mod helpers;
pub mod hotel;
pub mod pet;

pub use client::create_client;
pub use hotel::create_hotel;
pub use pet::create_pet;
