//! Auth feature slice: credential modal view and auth result handling.

mod render;
mod update;

pub use render::render_credential_modal;
pub use update::{AuthResultUpdate, ModalAction, handle_auth_result};
