//! Connected-session registry.
//!
//! Tracks which sessions are connected and routes messages to them. No
//! application state is attached to a session.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::message::ServerMessage;
use crate::router::Outbox;

/// Opaque identity of one connected client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Messages a session may have queued before it is considered stalled.
pub const OUTBOX_CAPACITY: usize = 100;

pub type SessionSender = mpsc::Sender<ServerMessage>;
pub type SessionReceiver = mpsc::Receiver<ServerMessage>;

/// Queue `msg`, logging why a session has to be dropped when it cannot.
fn deliver(id: &SessionId, sender: &SessionSender, msg: ServerMessage) -> bool {
    match sender.try_send(msg) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            warn!(session = %id, capacity = OUTBOX_CAPACITY, "Dropping stalled session, outbox full");
            false
        }
        Err(TrySendError::Closed(_)) => {
            debug!(session = %id, "Dropping session with closed outbox");
            false
        }
    }
}

/// Manages active sessions and their outboxes.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, SessionSender>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionSender>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a new session and return the receiving end of its outbox.
    ///
    /// A session that falls [`OUTBOX_CAPACITY`] messages behind is dropped,
    /// which closes its receiver once the queued messages are drained.
    pub fn register(&self) -> (SessionId, SessionReceiver) {
        let id = SessionId::new();
        let (tx, rx) = mpsc::channel(OUTBOX_CAPACITY);
        self.lock().insert(id, tx);
        (id, rx)
    }

    /// Remove a session. Returns false if it was not registered.
    pub fn unregister(&self, id: &SessionId) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Send to one session. Returns false if it is gone.
    pub fn send_to(&self, id: &SessionId, msg: ServerMessage) -> bool {
        let mut sessions = self.lock();
        let Some(sender) = sessions.get(id) else {
            return false;
        };
        if deliver(id, sender, msg) {
            return true;
        }
        sessions.remove(id);
        false
    }

    /// Send to every session. Returns how many received it.
    pub fn broadcast(&self, msg: ServerMessage) -> usize {
        let mut sessions = self.lock();
        sessions.retain(|id, sender| deliver(id, sender, msg.clone()));
        sessions.len()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Outbox for SessionRegistry {
    fn send_to(&self, session: &SessionId, msg: ServerMessage) {
        SessionRegistry::send_to(self, session, msg);
    }

    fn broadcast(&self, msg: ServerMessage) {
        SessionRegistry::broadcast(self, msg);
    }
}
