//! # User Directory
//!
//! An in-memory directory of users built on [`resource_actor`]. Users are inserted with a
//! username that must be unique, receive sequential ids starting at 1, and can be looked up by
//! id, by username, or listed in insertion order. Nothing is persisted.
//!
//! - **[model]**: [`User`](model::User) and the [`NewUser`](model::NewUser) insert payload.
//! - **[directory]**: the `ActorEntity` implementation, validation rules and errors.
//! - **[clients]**: [`DirectoryClient`](clients::DirectoryClient), the handle callers share.
//! - **[handlers]**: the add / find / list call shapes with status codes and JSON bodies.
//! - **[lifecycle]**: configuration, tracing setup and [`DirectorySystem`](lifecycle::DirectorySystem).

pub mod clients;
pub mod directory;
pub mod handlers;
pub mod lifecycle;
pub mod model;
