//! Top-level view.
//!
//! Draws the current route, then toasts, then the modal on top. Render is
//! read-only except for `modal_area`, which the reducer uses for mouse
//! hit-testing.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::TaskKind;
use crate::features::navbar::{self, NAVBAR_HEIGHT};
use crate::state::{AppState, TuiState};
use crate::{roster, toast};

pub const PRODUCT_NAME: &str = "Night Vigilance";

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    if app.tui.route.is_dashboard() {
        render_dashboard(frame, &app.tui, area);
    } else {
        render_home(frame, &app.tui, area);
    }

    toast::render_toasts(frame, area, &app.tui.toasts);

    let modal_area = app
        .modal
        .render(frame, area, app.tui.session.loading)
        .unwrap_or_default();
    app.tui.modal_area.set(modal_area);
}

fn render_dashboard(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let [nav, body, hints] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    navbar::render_navbar(frame, nav, tui.route, &tui.session, tui.spinner_frame);

    let loading = tui.tasks.state(TaskKind::RosterLoad).is_running();
    roster::render_roster(frame, &tui.roster, loading, body);

    let text = if tui.roster.search_focused {
        "type to filter · Ctrl+U clear · Enter/Esc done"
    } else {
        "/ search · Esc clear · Tab/+/- entries · r reload · h home"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        hints,
    );
}

fn render_home(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let status = if tui.session.authenticated {
        Span::styled("You are signed in", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "Sign in to view the vigilance roster",
            Style::default().fg(Color::DarkGray),
        )
    };
    let hint = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("{key:>3}  "), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{action:<16}"), Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            PRODUCT_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Security personnel roster dashboard",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(status),
        Line::default(),
        hint("l", "Log in"),
        hint("s", "Sign up"),
        hint("d", "Open dashboard"),
        hint("q", "Quit"),
    ];

    let content_height = lines.len() as u16;
    let [_, content, _, footer] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(content_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );

    let year = chrono::Local::now().year();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("© {year} {PRODUCT_NAME}. All rights reserved."),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        footer,
    );
}
