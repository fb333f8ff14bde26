//! The relay: one router, one session registry, one lock.

use std::sync::{Mutex, MutexGuard};

use crate::message::ClientEvent;
use crate::progress::ProgressSnapshot;
use crate::router::{EventRouter, InboundEvent};
use crate::session::{SessionId, SessionReceiver, SessionRegistry};

/// Shared entry point for transports.
///
/// Every event is applied and delivered while the router lock is held, so
/// all sessions see broadcasts in the order the roster changed.
#[derive(Default)]
pub struct Relay {
    router: Mutex<EventRouter>,
    sessions: SessionRegistry,
}

impl Relay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_router(router: EventRouter) -> Self {
        Self {
            router: Mutex::new(router),
            sessions: SessionRegistry::new(),
        }
    }

    // Roster is plain data and every mutation leaves it valid, so a
    // poisoned lock is still safe to use.
    fn router(&self) -> MutexGuard<'_, EventRouter> {
        self.router.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a new session and send it the current user list.
    pub fn connect(&self) -> (SessionId, SessionReceiver) {
        let mut router = self.router();
        let (id, rx) = self.sessions.register();
        router.dispatch(id, InboundEvent::Connected, &self.sessions);
        (id, rx)
    }

    pub fn receive(&self, session: SessionId, event: ClientEvent) {
        self.router().dispatch(session, event.into(), &self.sessions);
    }

    pub fn disconnect(&self, session: SessionId) {
        let mut router = self.router();
        router.dispatch(session, InboundEvent::Disconnected, &self.sessions);
        self.sessions.unregister(&session);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.router().snapshot()
    }

    pub fn required(&self) -> Vec<String> {
        self.router().roster().required().to_vec()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
