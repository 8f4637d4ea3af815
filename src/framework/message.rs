//! # Session Messages
//!
//! Message types exchanged between [`SessionClient`](crate::framework::SessionClient)
//! and [`SessionActor`](crate::framework::SessionActor).

use crate::framework::{FrameworkError, SessionEntity};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// - **Open**: starts a session from [`SessionEntity::Seed`] and returns its id.
/// - **Snapshot**: returns a copy of the session's current state.
/// - **Action**: applies a [`SessionEntity::Action`].
/// - **Close**: discards the session.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Open {
        seed: T::Seed,
        respond_to: Response<T::Id>,
    },
    Snapshot {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Close {
        id: T::Id,
        respond_to: Response<()>,
    },
}
