use serde::{Deserialize, Serialize};

/// Identifier assigned by the directory. Starts at 1.
pub type UserId = u32;

/// A user stored in the directory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](resource_actor::ResourceActor).
/// The `username` is the unique key; `id` is assigned on insert. Neither changes afterwards.
///
/// Serialized with camelCase field names:
///
/// ```json
/// {"id": 1, "firstName": "Sergio", "lastName": "del Amo", "username": "sdelamo"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Payload for inserting a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
        }
    }
}

impl User {
    /// Builds the stored record from the id the directory assigned.
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            username: new_user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_uses_camel_case_on_the_wire() {
        let user = User::from_new(1, NewUser::new("Sergio", "del Amo", "sdelamo"));

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 1, "firstName": "Sergio", "lastName": "del Amo", "username": "sdelamo"})
        );
    }

    #[test]
    fn new_user_requires_every_field() {
        let missing_username = json!({"firstName": "Sergio", "lastName": "del Amo"});

        assert!(serde_json::from_value::<NewUser>(missing_username).is_err());
    }
}
