//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default read methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// A domain client only supplies access to its inner `ResourceClient` and a mapping from
/// [`FrameworkError`] into its own error type; `get`, `find_by_key`, `list` and `len` come for free.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// impl ActorEntity for Tag {
///     type Id = u32; type Key = String; type Create = TagCreate;
///     type Context = (); type Error = TagError;
///     fn id(&self) -> &u32 { &self.id }
///     fn key(&self) -> &String { &self.label }
///     fn create_key(params: &TagCreate) -> &String { &params.label }
///     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: params.label })
///     }
/// }
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and list() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id. `Ok(None)` means no record has that id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a record by its unique key.
    #[tracing::instrument(skip(self))]
    async fn find_by_key(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_key(key).await.map_err(Self::map_error)
    }

    /// Fetch every record in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn len(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }
}
