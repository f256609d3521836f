//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must implement to be stored by
//! the generic `ResourceActor`. It names the identifier, the unique key, the creation payload,
//! the validation context and the error type. Implementing it gives the type a uniform
//! Create + Read API with uniqueness enforcement and sequential id assignment.
//!
//! # Architecture Note
//! The actor owns the store and the id counter; the entity only describes how to build
//! itself and which of its fields must be unique. Keeping the uniqueness scan inside the
//! actor loop is what makes check-then-insert atomic: nothing else can touch the store
//! between the scan and the append.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate`]: runs before the uniqueness scan. The default accepts every
//!   payload.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Context
/// `Context` is injected into [`ActorEntity::validate`] when the actor is started with
/// `run(context)`, not when it is constructed. Use `()` if validation needs nothing.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier assigned by the actor.
    /// Must be convertible from u32 for sequential id generation.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The field that must be unique across all stored records (e.g. a username).
    type Key: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Dependencies or rules injected at `run()` time.
    type Context: Send + Sync;

    /// The error type returned by validation and construction.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of a stored record.
    fn id(&self) -> &Self::Id;

    /// The unique key of a stored record.
    fn key(&self) -> &Self::Key;

    /// The unique key a creation payload would occupy once stored.
    fn create_key(params: &Self::Create) -> &Self::Key;

    /// Construct the full record from the assigned id and the payload.
    /// Called only after validation and the uniqueness check have passed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Reject a payload before anything is scanned or stored.
    fn validate(_params: &Self::Create, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
