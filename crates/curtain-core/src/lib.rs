//! Curtain Core Library
//!
//! Shared progress state for the curtain relay: the roster of required
//! participants, derived progress, and the event router that decides what
//! every connected session gets told.

pub mod error;
pub mod message;
pub mod progress;
pub mod relay;
pub mod roster;
pub mod router;
pub mod session;

pub use error::{CurtainError, CurtainResult};
pub use message::{ClientEvent, ServerMessage};
pub use progress::ProgressSnapshot;
pub use relay::Relay;
pub use roster::{MarkResult, Roster};
pub use router::{Dispatch, EventRouter, InboundEvent, Outbox, Target};
pub use session::{SessionId, SessionRegistry};
