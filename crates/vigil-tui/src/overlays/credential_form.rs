//! Email/password form shared by the login and signup modals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vigil_core::auth::AuthAction;
use vigil_core::validate::Credentials;

use super::ModalUpdate;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Email,
    Password,
}

impl FormField {
    fn toggle(self) -> Self {
        match self {
            FormField::Email => FormField::Password,
            FormField::Password => FormField::Email,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CredentialForm {
    pub email: String,
    pub password: String,
    pub focus: FormField,
    /// Inline message under the fields.
    pub error: Option<String>,
}

impl CredentialForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.clone())
    }

    pub fn handle_key(&mut self, action: AuthAction, tui: &TuiState, key: KeyEvent) -> ModalUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => ModalUpdate::close(),
            KeyCode::Char('c') if ctrl => ModalUpdate::close(),
            KeyCode::Char('t') if ctrl => ModalUpdate::switch(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                ModalUpdate::stay()
            }
            KeyCode::Enter => self.submit(action, tui),
            KeyCode::Backspace => {
                self.focused_mut().pop();
                ModalUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_mut().push(c);
                ModalUpdate::stay()
            }
            _ => ModalUpdate::stay(),
        }
    }

    fn submit(&mut self, action: AuthAction, tui: &TuiState) -> ModalUpdate {
        if tui.session.loading {
            self.error = Some("Request in progress...".to_string());
            return ModalUpdate::stay();
        }

        let credentials = self.credentials();
        if let Err(err) = credentials.validate() {
            self.error = Some(err.to_string());
            return ModalUpdate::stay();
        }

        self.error = None;
        ModalUpdate::stay()
            .with_mutations(vec![StateMutation::BeginAuthRequest])
            .with_ui_effects(vec![UiEffect::SubmitCredentials {
                task: None,
                action,
                credentials,
            }])
    }
}
