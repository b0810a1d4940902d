//! Effect handlers.
//!
//! Pure async functions returning the `UiEvent` to feed back to the reducer.
//! The runtime owns spawning and the task lifecycle.

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use vigil_core::auth::{AuthAction, AuthClient};
use vigil_core::roster::RosterSource;
use vigil_core::validate::Credentials;

use crate::events::UiEvent;

/// Runs one auth request, abandoning it if `cancel` fires first.
pub async fn submit_credentials(
    client: AuthClient,
    action: AuthAction,
    credentials: Credentials,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let request = client.submit(action, &credentials);
    let result = match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => return UiEvent::AuthCancelled { action },
                result = request => result,
            }
        }
        None => request.await,
    };
    UiEvent::AuthFinished { action, result }
}

/// Reads the roster source off the UI thread.
pub async fn load_roster(source: Arc<dyn RosterSource>) -> UiEvent {
    let label = source.describe();
    let result = tokio::task::spawn_blocking(move || source.list())
        .await
        .context("Roster load task failed")
        .and_then(|listed| listed.context("Failed to load roster"))
        .map_err(|e| format!("{e:#}"));
    UiEvent::RosterLoaded {
        source: label,
        result,
    }
}
