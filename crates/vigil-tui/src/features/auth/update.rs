//! Auth feature reducer.
//!
//! Maps an auth request outcome to session changes, a toast, what happens to
//! the modal and the follow-up navigation.

use vigil_core::auth::{AuthAction, AuthError, ErrorKind};
use vigil_core::session::Session;

use crate::effects::UiEffect;
use crate::features::toast::Toast;

/// What the reducer should do with the open modal.
#[derive(Debug, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    /// Keep the form open with an inline message.
    ShowError(String),
    Keep,
}

#[derive(Debug)]
pub struct AuthResultUpdate {
    pub toast: Option<Toast>,
    pub modal: ModalAction,
    pub effects: Vec<UiEffect>,
}

pub fn handle_auth_result(
    session: &mut Session,
    action: AuthAction,
    result: Result<Session, AuthError>,
) -> AuthResultUpdate {
    session.complete(&result);

    match result {
        Ok(_) => {
            tracing::info!(%action, route = %action.landing_route(), "Authenticated");
            AuthResultUpdate {
                toast: Some(Toast::success(action.success_message())),
                modal: ModalAction::Close,
                effects: vec![UiEffect::Navigate {
                    route: action.landing_route(),
                }],
            }
        }
        Err(err) => match err.kind() {
            ErrorKind::Validation => AuthResultUpdate {
                toast: None,
                modal: ModalAction::ShowError(err.to_string()),
                effects: vec![],
            },
            ErrorKind::Request => {
                tracing::warn!(%action, error = %err, "Auth request failed");
                failure(action)
            }
            ErrorKind::Unhandled => {
                tracing::error!(%action, error = ?err, "Unhandled auth error");
                failure(action)
            }
        },
    }
}

fn failure(action: AuthAction) -> AuthResultUpdate {
    AuthResultUpdate {
        toast: Some(Toast::error(action.failure_message())),
        modal: ModalAction::Keep,
        effects: vec![],
    }
}
