//! ActorEntity implementation for the [`User`] record.
//!
//! The username is the unique key, so the generic actor's uniqueness scan is exactly the
//! duplicate-username check. Validation runs first, with [`ValidationRules`] injected as the
//! run context.

use crate::directory::DirectoryError;
use crate::model::{NewUser, User, UserId};
use resource_actor::ActorEntity;

/// Limits applied to every insert candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_username_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_username_length: 64,
        }
    }
}

impl ActorEntity for User {
    type Id = UserId;
    type Key = String;
    type Create = NewUser;
    type Context = ValidationRules;
    type Error = DirectoryError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn key(&self) -> &String {
        &self.username
    }

    fn create_key(params: &NewUser) -> &String {
        &params.username
    }

    fn from_create_params(id: UserId, params: NewUser) -> Result<Self, DirectoryError> {
        Ok(Self::from_new(id, params))
    }

    /// Rejects blank names and usernames, and usernames over the configured length.
    fn validate(params: &NewUser, rules: &ValidationRules) -> Result<(), DirectoryError> {
        if params.username.trim().is_empty() {
            return Err(DirectoryError::validation("username", "must not be blank"));
        }
        let len = params.username.chars().count();
        if len > rules.max_username_length {
            return Err(DirectoryError::validation(
                "username",
                format!(
                    "{} characters exceeds the limit of {}",
                    len, rules.max_username_length
                ),
            ));
        }
        if params.first_name.trim().is_empty() {
            return Err(DirectoryError::validation("firstName", "must not be blank"));
        }
        if params.last_name.trim().is_empty() {
            return Err(DirectoryError::validation("lastName", "must not be blank"));
        }
        Ok(())
    }
}
