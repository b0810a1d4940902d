//! Roster panel view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use vigil_core::roster::RosterEntry;

use super::RosterState;
use crate::overlays::render_utils::{InputLine, render_input_line};

const HEADERS: [&str; 8] = [
    "Sr. No.",
    "Location",
    "Team Head",
    "Shift In Charge",
    "Security Staff",
    "Schedule Date",
    "Schedule Time",
    "Action",
];

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(8),
    Constraint::Min(10),
    Constraint::Min(12),
    Constraint::Min(15),
    Constraint::Min(14),
    Constraint::Length(13),
    Constraint::Length(13),
    Constraint::Length(8),
];

pub fn render_roster(frame: &mut Frame, roster: &RosterState, loading: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Night Vigilance Roster ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [controls, locations, table_area, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_controls(frame, roster, controls);

    let location_text = roster.locations().join(" · ");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Locations: ", Style::default().fg(Color::DarkGray)),
            Span::styled(location_text, Style::default().fg(Color::White)),
        ])),
        locations,
    );

    let page = roster.page();
    if let Some(error) = &roster.load_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Could not load roster: {error}"),
                Style::default().fg(Color::Red),
            )),
            table_area,
        );
    } else if loading && roster.records.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading roster...",
                Style::default().fg(Color::DarkGray),
            )),
            table_area,
        );
    } else {
        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let rows = page
            .rows
            .iter()
            .enumerate()
            .map(|(idx, &entry)| roster_row(idx + 1, entry));
        let table = Table::new(rows, WIDTHS).header(header).column_spacing(1);
        frame.render_widget(table, table_area);
    }

    let source = roster.source_label.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(page.footer(), Style::default().fg(Color::White)),
            Span::styled(format!("  {source}"), Style::default().fg(Color::DarkGray)),
        ])),
        footer,
    );
}

fn render_controls(frame: &mut Frame, roster: &RosterState, area: Rect) {
    let entries = format!("Show {} entries  ", roster.page_size);
    let entries_width = entries.len() as u16;
    frame.render_widget(
        Paragraph::new(Span::styled(entries, Style::default().fg(Color::Cyan))),
        Rect::new(area.x, area.y, entries_width.min(area.width), 1),
    );

    let search_area = Rect::new(
        area.x + entries_width.min(area.width),
        area.y,
        area.width.saturating_sub(entries_width),
        1,
    );
    let (prompt_color, cursor_color) = if roster.search_focused {
        (Color::Yellow, Color::Yellow)
    } else {
        (Color::DarkGray, Color::Black)
    };
    render_input_line(
        frame,
        search_area,
        &InputLine {
            value: &roster.search,
            placeholder: Some("press / to search"),
            prompt: "Search: ",
            prompt_color,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
            cursor_color,
        },
    );
}

/// `serial` counts from 1 within the visible page, not the record id.
fn roster_row(serial: usize, entry: &RosterEntry) -> Row<'_> {
    Row::new([
        Cell::from(serial.to_string()),
        Cell::from(entry.location.as_str()),
        Cell::from(entry.team_head.as_str()),
        Cell::from(entry.shift_in_charge.as_str()),
        Cell::from(entry.security_staff.as_str()),
        Cell::from(entry.schedule_date.as_str()),
        Cell::from(entry.schedule_time.as_str()),
        Cell::from(Span::styled("v e d", Style::default().fg(Color::DarkGray))),
    ])
}
