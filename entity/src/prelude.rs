pub use super::client::Entity as Client;
pub use super::hotel::Entity as Hotel;
pub use super::pet::Entity as Pet;
