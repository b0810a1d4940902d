//! Auth feature view.
//!
//! Rendering for the login and signup modals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use vigil_core::auth::AuthAction;

use crate::overlays::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_secret_line,
    render_separator,
};
use crate::overlays::{CredentialForm, FormField};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 10;

/// Renders the credential modal for `action` and returns its outer box.
pub fn render_credential_modal(
    frame: &mut Frame,
    area: Rect,
    action: AuthAction,
    form: &CredentialForm,
    loading: bool,
) -> Rect {
    let (title, switch_text) = match action {
        AuthAction::Login => ("Log In", "New here? Ctrl+T to sign up"),
        AuthAction::Register => ("Sign Up", "Have an account? Ctrl+T to log in"),
    };
    let hints = [
        InputHint::new("Enter", "submit"),
        InputHint::new("Tab", "next field"),
        InputHint::new("Esc", "close"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title,
            border_color: Color::Cyan,
            width: MODAL_WIDTH,
            height: MODAL_HEIGHT,
            hints: &hints,
        },
    );
    let body = layout.body;

    let field_color = |field: FormField| {
        if form.focus == field {
            (Color::Cyan, Color::Cyan)
        } else {
            (Color::DarkGray, Color::Reset)
        }
    };

    let (prompt_color, cursor_color) = field_color(FormField::Email);
    render_input_line(
        frame,
        Rect::new(body.x, body.y, body.width, 1),
        &InputLine {
            value: &form.email,
            placeholder: Some("name@example.com"),
            prompt: "Email:    ",
            prompt_color,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
            cursor_color,
        },
    );

    let (prompt_color, cursor_color) = field_color(FormField::Password);
    render_secret_line(
        frame,
        Rect::new(body.x, body.y + 1, body.width, 1),
        &InputLine {
            value: &form.password,
            placeholder: Some("at least 8 characters"),
            prompt: "Password: ",
            prompt_color,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
            cursor_color,
        },
    );

    render_separator(frame, body, 2);

    let status = if let Some(error) = &form.error {
        Span::styled(error.as_str(), Style::default().fg(Color::Red))
    } else if loading {
        Span::styled("Please wait...", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };
    if body.height > 3 {
        frame.render_widget(
            Paragraph::new(Line::from(status)),
            Rect::new(body.x, body.y + 3, body.width, 1),
        );
    }
    if body.height > 4 {
        frame.render_widget(
            Paragraph::new(Span::styled(switch_text, Style::default().fg(Color::DarkGray))),
            Rect::new(body.x, body.y + 4, body.width, 1),
        );
    }

    layout.popup
}
