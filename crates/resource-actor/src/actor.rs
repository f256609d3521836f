//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of records
//! and processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the store needs no
/// `Mutex` or `RwLock`. A `Create` runs its uniqueness scan and its append inside a single
/// iteration of the loop: two creates with the same key can never both pass the scan, and no
/// read can observe a record that is half inserted.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the validation context into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Key = String;
///     type Create = TagCreate;
///     type Context = ();
///     type Error = TagError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn key(&self) -> &String { &self.label }
///     fn create_key(params: &TagCreate) -> &String { &params.label }
///     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: params.label })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `Vec` kept in insertion order. Lookups are linear scans. Ids come from a
/// `u32` counter (`next_id`) that starts at 1 and advances only when a create succeeds, so
/// with no removal path the next id is always `len + 1` and ids are never reused. Once the
/// counter cannot advance, creates fail with [`FrameworkError::IdsExhausted`].
///
/// * **Create**:
///     1. Calls `T::validate` with the run context.
///     2. Scans the store for a record whose key equals the payload's key; a match is a
///        [`FrameworkError::Conflict`].
///     3. Builds the record with `T::from_create_params` and the next id.
///     4. Appends it, advances the counter and returns a clone.
///
/// * **Get** / **FindByKey**: clone of the first matching record, or `None`.
///
/// * **List**: clone of the whole store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "user_directory::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self.find_by_key(&key).cloned();
                    debug!(entity_type, %key, found = item.is_some(), "FindByKey");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        T::validate(&params, context).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        if let Some(existing) = self.find_by_key(T::create_key(&params)) {
            return Err(FrameworkError::Conflict(existing.key().to_string()));
        }

        let following = self
            .next_id
            .checked_add(1)
            .ok_or(FrameworkError::IdsExhausted)?;
        let id = T::Id::from(self.next_id);
        let item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.push(item.clone());
        self.next_id = following;
        Ok(item)
    }

    fn find_by_key(&self, key: &T::Key) -> Option<&T> {
        self.store.iter().find(|item| item.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("label must not be empty")]
    struct EmptyLabel;

    impl ActorEntity for Tag {
        type Id = u32;
        type Key = String;
        type Create = TagCreate;
        type Context = ();
        type Error = EmptyLabel;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn key(&self) -> &String {
            &self.label
        }

        fn create_key(params: &TagCreate) -> &String {
            &params.label
        }

        fn from_create_params(id: u32, params: TagCreate) -> Result<Self, EmptyLabel> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        fn validate(params: &TagCreate, _ctx: &()) -> Result<(), EmptyLabel> {
            if params.label.is_empty() {
                return Err(EmptyLabel);
            }
            Ok(())
        }
    }

    fn tag(label: &str) -> TagCreate {
        TagCreate {
            label: label.to_string(),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let (mut actor, _client) = ResourceActor::<Tag>::new(1);

        let first = actor.create(tag("a"), &()).unwrap();
        let second = actor.create(tag("b"), &()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(actor.store, vec![first, second]);
    }

    #[test]
    fn duplicate_key_is_rejected_without_mutation() {
        let (mut actor, _client) = ResourceActor::<Tag>::new(1);
        actor.create(tag("a"), &()).unwrap();

        let err = actor.create(tag("a"), &()).unwrap_err();

        assert!(matches!(err, FrameworkError::Conflict(ref key) if key == "a"));
        assert_eq!(actor.store.len(), 1);
        assert_eq!(actor.next_id, 2);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let (mut actor, _client) = ResourceActor::<Tag>::new(1);
        actor.create(tag("a"), &()).unwrap();

        let upper = actor.create(tag("A"), &()).unwrap();

        assert_eq!(upper.id, 2);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let (mut actor, _client) = ResourceActor::<Tag>::new(1);
        actor.next_id = u32::MAX;

        let err = actor.create(tag("a"), &()).unwrap_err();

        assert!(matches!(err, FrameworkError::IdsExhausted));
        assert!(actor.store.is_empty());
        assert_eq!(actor.next_id, u32::MAX);
    }

    #[test]
    fn failed_validation_does_not_consume_an_id() {
        let (mut actor, _client) = ResourceActor::<Tag>::new(1);

        let err = actor.create(tag(""), &()).unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let created = actor.create(tag("a"), &()).unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn lookups_through_the_client() {
        let (actor, client) = ResourceActor::<Tag>::new(4);
        tokio::spawn(actor.run(()));

        client.create(tag("a")).await.unwrap();
        client.create(tag("b")).await.unwrap();

        assert_eq!(client.get(2).await.unwrap().unwrap().label, "b");
        assert!(client.get(3).await.unwrap().is_none());
        assert_eq!(client.find_by_key("a".into()).await.unwrap().unwrap().id, 1);
        assert!(client.find_by_key("c".into()).await.unwrap().is_none());
        assert_eq!(client.len().await.unwrap(), 2);
    }
}
