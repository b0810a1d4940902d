//! Modal overlays.
//!
//! The credential modal is a single tagged enum, so login and signup can
//! never be open together. Every transition builds a fresh
//! [`CredentialForm`]; nothing typed survives a close or a switch.
//!
//! - `credential_form.rs`: form state and key handling
//! - `render_utils.rs`: shared overlay drawing helpers

pub mod credential_form;
pub mod render_utils;

pub use credential_form::{CredentialForm, FormField};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use vigil_core::auth::AuthAction;

use crate::auth::render_credential_modal;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Transition returned by modal key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTransition {
    Stay,
    Close,
    /// Login to signup or back.
    Switch,
}

/// Update returned by modal key handlers.
#[derive(Debug)]
pub struct ModalUpdate {
    pub transition: ModalTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl ModalUpdate {
    fn new(transition: ModalTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(ModalTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(ModalTransition::Close)
    }

    pub fn switch() -> Self {
        Self::new(ModalTransition::Switch)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    Closed,
    Login(CredentialForm),
    Signup(CredentialForm),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    /// The auth action the open form submits to.
    pub fn kind(&self) -> Option<AuthAction> {
        match self {
            Modal::Closed => None,
            Modal::Login(_) => Some(AuthAction::Login),
            Modal::Signup(_) => Some(AuthAction::Register),
        }
    }

    pub fn form(&self) -> Option<&CredentialForm> {
        match self {
            Modal::Closed => None,
            Modal::Login(form) | Modal::Signup(form) => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut CredentialForm> {
        match self {
            Modal::Closed => None,
            Modal::Login(form) | Modal::Signup(form) => Some(form),
        }
    }

    /// Opens the login form. No-op unless closed.
    pub fn open_login(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Modal::Login(CredentialForm::default());
        true
    }

    /// Opens the signup form. No-op unless closed.
    pub fn open_signup(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Modal::Signup(CredentialForm::default());
        true
    }

    pub fn switch_to_signup(&mut self) -> bool {
        if !matches!(self, Modal::Login(_)) {
            return false;
        }
        *self = Modal::Signup(CredentialForm::default());
        true
    }

    pub fn switch_to_login(&mut self) -> bool {
        if !matches!(self, Modal::Signup(_)) {
            return false;
        }
        *self = Modal::Login(CredentialForm::default());
        true
    }

    /// Switches to whichever form is not open.
    pub fn switch(&mut self) -> bool {
        match self {
            Modal::Closed => false,
            Modal::Login(_) => self.switch_to_signup(),
            Modal::Signup(_) => self.switch_to_login(),
        }
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = Modal::Closed;
        true
    }

    /// Draws the open form and returns its outer box.
    pub fn render(&self, frame: &mut Frame, area: Rect, loading: bool) -> Option<Rect> {
        let action = self.kind()?;
        let form = self.form()?;
        Some(render_credential_modal(frame, area, action, form, loading))
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> Option<ModalUpdate> {
        let action = self.kind()?;
        let form = self.form_mut()?;
        Some(form.handle_key(action, tui, key))
    }
}
