//! # Generic Messages
//!
//! The request type sent from `ResourceClient` to `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every variant carries its own responder, so the caller awaits exactly the answer to its
/// request even when many clients share the channel.
///
/// - **Create**: validate, check key uniqueness, assign the next id, append.
/// - **Get**: first record with the given id.
/// - **FindByKey**: first record with the given unique key.
/// - **List**: snapshot of all records in insertion order.
/// - **Len**: number of stored records.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Len {
        respond_to: Response<usize>,
    },
}
