//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs I/O
//! or spawns tasks directly.

use tokio_util::sync::CancellationToken;
use vigil_core::auth::AuthAction;
use vigil_core::session::Route;
use vigil_core::validate::Credentials;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// POST validated credentials to the login or register endpoint.
    ///
    /// `task` is `None` when produced by a modal and filled in by the reducer.
    SubmitCredentials {
        task: Option<TaskId>,
        action: AuthAction,
        credentials: Credentials,
    },

    /// Read the roster source.
    LoadRoster { task: Option<TaskId> },

    /// Switch the visible page.
    Navigate { route: Route },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
