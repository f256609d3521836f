//! # Resource Actor
//!
//! This crate provides a generic, in-memory store of records run as a Tokio actor. A single
//! task owns the records; every other part of the program talks to it through a cloneable
//! client. Requests are processed one at a time, which gives the store two guarantees without
//! any locks:
//!
//! - **Uniqueness**: a create is rejected when a stored record already has the same key, and
//!   two racing creates with the same key can never both succeed.
//! - **No torn reads**: a lookup sees a record either fully stored or not at all.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - The record type, its id, unique key and validation
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the store itself
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Account {
//!     id: u32,
//!     handle: String,
//! }
//!
//! #[derive(Debug)] struct AccountCreate { handle: String }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct AccountError(String);
//!
//! impl ActorEntity for Account {
//!     type Id = u32;
//!     type Key = String;
//!     type Create = AccountCreate;
//!     type Context = ();
//!     type Error = AccountError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!     fn key(&self) -> &String { &self.handle }
//!     fn create_key(params: &AccountCreate) -> &String { &params.handle }
//!
//!     fn from_create_params(id: u32, params: AccountCreate) -> Result<Self, AccountError> {
//!         Ok(Self { id, handle: params.handle })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Account>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client.create(AccountCreate { handle: "ferris".into() }).await.unwrap();
//!     assert_eq!(created.id, 1);
//!
//!     let again = client.create(AccountCreate { handle: "ferris".into() }).await;
//!     assert!(matches!(again, Err(FrameworkError::Conflict(_))));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - The channel is bounded; a full channel makes callers wait rather than grow memory
//! - Dropping the last client closes the channel and stops the actor
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from queued expectations, so wrappers around
//! [`ResourceClient`] can be unit tested without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
