//! # Request Handlers
//!
//! The three call shapes a request-handling layer uses to reach the directory, independent of
//! transport. Each handler returns a [`Reply`]: an HTTP-style status and a JSON body. Routing,
//! authentication and the server itself belong to the caller.
//!
//! | Call | Success | Failure |
//! |------|---------|---------|
//! | [`add_user`] | `200` created user | `400` bad body or candidate, `409` username taken |
//! | [`find_user`] | `200` user | `404` no such id |
//! | [`list_users`] | `200` array in insertion order | |
//!
//! Any call made after the directory stopped answers `503`; faults inside the directory
//! answer `500`.

use crate::clients::DirectoryClient;
use crate::directory::DirectoryError;
use crate::model::{NewUser, UserId};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{instrument, warn};

/// Status of a handled call. The discriminant is the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    Conflict = 409,
    InternalError = 500,
    ServiceUnavailable = 503,
}

impl Status {
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// A status plus the JSON body to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: Status,
    pub body: Value,
}

impl Reply {
    fn ok(body: impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status: Status::Ok,
                body,
            },
            Err(e) => Self::error(Status::InternalError, e.to_string()),
        }
    }

    fn error(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "message": message.into() }),
        }
    }
}

impl From<DirectoryError> for Reply {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::Conflict { .. } => Self::error(
                Status::Conflict,
                "User with provided username already exists",
            ),
            DirectoryError::Validation { .. } => Self::error(Status::BadRequest, e.to_string()),
            DirectoryError::Unavailable(_) => {
                Self::error(Status::ServiceUnavailable, e.to_string())
            }
            DirectoryError::Internal(_) => Self::error(Status::InternalError, e.to_string()),
        }
    }
}

/// Inserts the user described by a JSON body `{firstName, lastName, username}`.
#[instrument(skip(directory, body))]
pub async fn add_user(directory: &DirectoryClient, body: &str) -> Reply {
    let candidate: NewUser = match serde_json::from_str(body) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!(error = %e, "Rejected malformed body");
            return Reply::error(Status::BadRequest, format!("Malformed user: {e}"));
        }
    };

    match directory.insert(candidate).await {
        Ok(user) => Reply::ok(user),
        Err(e) => e.into(),
    }
}

#[instrument(skip(directory))]
pub async fn find_user(directory: &DirectoryClient, id: UserId) -> Reply {
    match directory.find_by_id(id).await {
        Ok(Some(user)) => Reply::ok(user),
        Ok(None) => Reply::error(Status::NotFound, format!("User {id} not found")),
        Err(e) => e.into(),
    }
}

#[instrument(skip(directory))]
pub async fn list_users(directory: &DirectoryClient) -> Reply {
    match directory.list_all().await {
        Ok(users) => Reply::ok(users),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{self, ValidationRules};

    fn start() -> DirectoryClient {
        let (actor, client) = directory::new(8);
        tokio::spawn(actor.run(ValidationRules::default()));
        client
    }

    const SERGIO: &str = r#"{"firstName":"Sergio","lastName":"del Amo","username":"sdelamo"}"#;

    #[tokio::test]
    async fn add_user_returns_the_created_record() {
        let directory = start();

        let reply = add_user(&directory, SERGIO).await;

        assert_eq!(reply.status, Status::Ok);
        assert_eq!(
            reply.body,
            json!({"id": 1, "firstName": "Sergio", "lastName": "del Amo", "username": "sdelamo"})
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let directory = start();
        add_user(&directory, SERGIO).await;

        let reply = add_user(&directory, SERGIO).await;

        assert_eq!(reply.status.code(), 409);
        assert_eq!(
            reply.body,
            json!({"message": "User with provided username already exists"})
        );
        assert_eq!(list_users(&directory).await.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_or_invalid_bodies_are_bad_requests() {
        let directory = start();

        let missing_field = add_user(&directory, r#"{"firstName":"Sergio"}"#).await;
        assert_eq!(missing_field.status, Status::BadRequest);

        let blank = add_user(
            &directory,
            r#"{"firstName":"Sergio","lastName":"del Amo","username":""}"#,
        )
        .await;
        assert_eq!(blank.status, Status::BadRequest);

        assert_eq!(list_users(&directory).await.body, json!([]));
    }

    #[tokio::test]
    async fn find_user_distinguishes_found_and_missing() {
        let directory = start();
        add_user(&directory, SERGIO).await;

        let found = find_user(&directory, 1).await;
        assert_eq!(found.status, Status::Ok);
        assert_eq!(found.body["username"], "sdelamo");

        let missing = find_user(&directory, 2).await;
        assert_eq!(missing.status, Status::NotFound);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn encoding_failure_is_an_internal_error() {
        let reply = Reply::ok(Unserializable);

        assert_eq!(reply.status.code(), 500);
        assert_eq!(reply.body, json!({"message": "cannot encode"}));
    }

    #[test]
    fn internal_directory_error_is_a_500() {
        let reply = Reply::from(DirectoryError::Internal("broken".to_string()));

        assert_eq!(reply.status, Status::InternalError);
    }

    #[tokio::test]
    async fn stopped_directory_is_unavailable() {
        let (actor, directory) = directory::new(1);
        drop(actor);

        let reply = list_users(&directory).await;

        assert_eq!(reply.status, Status::ServiceUnavailable);
    }
}
