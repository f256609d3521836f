//! # User Directory Actor
//!
//! The directory stores [`User`] records in memory and enforces one user per username.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`DirectoryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use user_directory::directory::{self, ValidationRules};
//! use user_directory::model::NewUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = directory::new(32);
//!     tokio::spawn(actor.run(ValidationRules::default()));
//!
//!     let user = client.insert(NewUser::new("Sergio", "del Amo", "sdelamo")).await?;
//!     assert_eq!(user.id, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Sequential ids**: the first user gets id 1, each later success gets the next integer
//! - **Atomic inserts**: the duplicate check and the append run inside one actor step
//! - **Type-safe errors**: all operations return `Result<T, DirectoryError>`

pub mod entity;
pub mod error;

pub use entity::ValidationRules;
pub use error::*;

use crate::clients::DirectoryClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new directory actor and its client.
///
/// `buffer_size` must be greater than zero.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, DirectoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = DirectoryClient::new(generic_client);

    (actor, client)
}
