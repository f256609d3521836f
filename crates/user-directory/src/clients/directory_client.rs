//! # Directory Client
//!
//! Provides a high‑level API for interacting with the user directory actor.
//! It wraps a `ResourceClient<User>` and exposes the directory operations by name.
use crate::directory::DirectoryError;
use crate::model::{NewUser, User, UserId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the directory actor. Cheap to clone.
#[derive(Clone)]
pub struct DirectoryClient {
    inner: ResourceClient<User>,
}

impl DirectoryClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for DirectoryClient {
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DirectoryError::from(e)
    }
}

impl DirectoryClient {
    /// Stores a new user and returns it with its assigned id.
    ///
    /// Fails with [`DirectoryError::Conflict`] when the username is taken and with
    /// [`DirectoryError::Validation`] when the candidate is rejected. Neither failure
    /// changes the directory.
    #[instrument(skip(self), fields(username = %candidate.username))]
    pub async fn insert(&self, candidate: NewUser) -> Result<User, DirectoryError> {
        debug!("Sending request");
        self.inner.create(candidate).await.map_err(Self::map_error)
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError> {
        self.get(id).await
    }

    /// Case-sensitive username lookup.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError> {
        self.find_by_key(username.to_string()).await
    }

    /// Every stored user in insertion order.
    pub async fn list_all(&self) -> Result<Vec<User>, DirectoryError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    fn sergio() -> User {
        User::from_new(1, NewUser::new("Sergio", "del Amo", "sdelamo"))
    }

    #[tokio::test]
    async fn insert_maps_conflict_into_the_domain_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict("sdelamo".to_string()));
        let client = DirectoryClient::new(mock.client());

        let result = client
            .insert(NewUser::new("Sergio", "del Amo", "sdelamo"))
            .await;

        assert_eq!(
            result,
            Err(DirectoryError::Conflict {
                username: "sdelamo".to_string()
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn find_by_username_sends_the_exact_key() {
        let mut mock = MockClient::<User>::new();
        mock.expect_find_by_key("sdelamo".to_string())
            .return_ok(Some(sergio()));
        let client = DirectoryClient::new(mock.client());

        let found = client.find_by_username("sdelamo").await.unwrap();

        assert_eq!(found, Some(sergio()));
        mock.verify();
    }

    #[tokio::test]
    async fn stopped_actor_is_unavailable() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(1).return_err(FrameworkError::ActorDropped);
        let client = DirectoryClient::new(mock.client());

        let result = client.find_by_id(1).await;

        assert!(matches!(result, Err(DirectoryError::Unavailable(_))));
    }
}
