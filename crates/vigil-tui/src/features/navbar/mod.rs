//! Navbar shell for dashboard routes: title, breadcrumb and session badge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use vigil_core::session::{Route, Session};

pub const NAVBAR_HEIGHT: u16 = 3;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Breadcrumb text for a route, e.g. `Home / Dashboard`.
pub fn breadcrumb(route: Route) -> String {
    match route {
        Route::Home => Route::Home.title().to_string(),
        other => format!("{} / {}", Route::Home.title(), other.title()),
    }
}

pub fn session_badge(session: &Session, spinner_frame: usize) -> (String, Color) {
    if session.loading {
        (
            format!("{} signing in", SPINNER[spinner_frame % SPINNER.len()]),
            Color::Yellow,
        )
    } else if session.authenticated {
        ("● signed in".to_string(), Color::Green)
    } else {
        ("○ guest".to_string(), Color::DarkGray)
    }
}

pub fn render_navbar(
    frame: &mut Frame,
    area: Rect,
    route: Route,
    session: &Session,
    spinner_frame: usize,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            route.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", breadcrumb(route)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let (badge, color) = session_badge(session, spinner_frame);
    let hints = Span::styled(
        "l login · s sign up · o sign out · q quit   ",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            hints,
            Span::styled(badge, Style::default().fg(color)),
        ]))
        .alignment(Alignment::Right),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb() {
        assert_eq!(breadcrumb(Route::Home), "Home");
        assert_eq!(breadcrumb(Route::Dashboard), "Home / Dashboard");
        assert_eq!(breadcrumb(Route::UserDashboard), "Home / User Dashboard");
    }

    #[test]
    fn test_badge_prefers_loading() {
        let mut session = Session::authenticated();
        session.loading = true;
        let (text, _) = session_badge(&session, 1);
        assert_eq!(text, "/ signing in");
        session.loading = false;
        assert_eq!(session_badge(&session, 0).0, "● signed in");
        assert_eq!(session_badge(&Session::new(), 0).0, "○ guest");
    }
}
