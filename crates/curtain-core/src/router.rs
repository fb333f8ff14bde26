//! Event routing.
//!
//! Applies inbound session events to the roster and decides which messages
//! go back to the sender and which go to everyone.

use tracing::{debug, info};

use crate::message::{ClientEvent, ServerMessage};
use crate::progress::ProgressSnapshot;
use crate::roster::{MarkResult, Roster};
use crate::session::SessionId;

/// Delivery capability the router sends through.
pub trait Outbox {
    fn send_to(&self, session: &SessionId, msg: ServerMessage);
    fn broadcast(&self, msg: ServerMessage);
}

/// Everything the transport can report about a session.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    Connected,
    Client(ClientEvent),
    Disconnected,
}

impl From<ClientEvent> for InboundEvent {
    fn from(event: ClientEvent) -> Self {
        Self::Client(event)
    }
}

/// Who a message goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Session(SessionId),
    All,
}

/// One outbound message and its recipients.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub target: Target,
    pub message: ServerMessage,
}

impl Dispatch {
    fn unicast(session: SessionId, message: ServerMessage) -> Self {
        Self {
            target: Target::Session(session),
            message,
        }
    }

    fn broadcast(message: ServerMessage) -> Self {
        Self {
            target: Target::All,
            message,
        }
    }
}

/// Owns the roster and turns events into dispatches.
#[derive(Debug, Default)]
pub struct EventRouter {
    roster: Roster,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.roster.snapshot()
    }

    /// Apply `event` from `session` and return the messages to emit, in order.
    pub fn handle(&mut self, session: SessionId, event: InboundEvent) -> Vec<Dispatch> {
        match event {
            InboundEvent::Connected => {
                info!(session = %session, "Client connected");
                vec![Dispatch::unicast(session, self.user_list())]
            }
            InboundEvent::Disconnected => {
                info!(session = %session, "Client disconnected");
                Vec::new()
            }
            InboundEvent::Client(ClientEvent::RegisterCurtain) => {
                debug!(session = %session, "Curtain registered");
                vec![Dispatch::unicast(session, self.progress())]
            }
            InboundEvent::Client(ClientEvent::SetUsers(raw_names)) => {
                self.roster.set_required(&raw_names);
                info!(
                    session = %session,
                    required = ?self.roster.required(),
                    "Required users set"
                );
                vec![
                    Dispatch::broadcast(self.user_list()),
                    Dispatch::broadcast(self.progress()),
                ]
            }
            InboundEvent::Client(ClientEvent::UserClicked(name)) => self.user_clicked(session, &name),
        }
    }

    /// [`EventRouter::handle`] followed by delivery through `outbox`.
    pub fn dispatch(&mut self, session: SessionId, event: InboundEvent, outbox: &impl Outbox) {
        for Dispatch { target, message } in self.handle(session, event) {
            match target {
                Target::Session(id) => outbox.send_to(&id, message),
                Target::All => outbox.broadcast(message),
            }
        }
    }

    fn user_clicked(&mut self, session: SessionId, name: &str) -> Vec<Dispatch> {
        let was_complete = self.roster.is_complete();

        let clicked = match self.roster.mark_completed(name) {
            MarkResult::Marked { new_count } => new_count,
            MarkResult::AlreadyMarked => {
                debug!(session = %session, user = %name, "Duplicate click ignored");
                return Vec::new();
            }
        };
        info!(
            session = %session,
            user = %name,
            clicked,
            total = self.roster.total_count(),
            "User clicked"
        );

        let mut out = vec![Dispatch::broadcast(self.progress())];
        if !was_complete && self.roster.is_complete() {
            info!("Required users reached, opening the curtain");
            out.push(Dispatch::broadcast(ServerMessage::OpenCurtain));
        }
        out
    }

    fn user_list(&self) -> ServerMessage {
        ServerMessage::UpdateUserList(self.roster.required().to_vec())
    }

    fn progress(&self) -> ServerMessage {
        ServerMessage::ProgressUpdate(self.roster.snapshot())
    }
}
