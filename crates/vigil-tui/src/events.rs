//! Events consumed by the reducer.
//!
//! Terminal input, timer ticks and async task results all arrive as a
//! `UiEvent`; `update::update` is the only consumer.

use crossterm::event::Event;
use vigil_core::auth::{AuthAction, AuthError};
use vigil_core::roster::RosterEntry;
use vigil_core::session::Session;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick; drives toast expiry, the spinner and rendering.
    Tick,
    /// Current terminal size, sent first in every batch.
    Frame { width: u16, height: u16 },
    Terminal(Event),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// An auth request resolved.
    AuthFinished {
        action: AuthAction,
        result: Result<Session, AuthError>,
    },
    /// An auth request stopped because its token was cancelled.
    AuthCancelled { action: AuthAction },

    /// The roster source was read.
    RosterLoaded {
        source: String,
        result: Result<Vec<RosterEntry>, String>,
    },
}
