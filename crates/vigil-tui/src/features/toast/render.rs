use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{ToastKind, Toasts};
use crate::common::truncate_with_ellipsis;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Stacks toasts in the top-right corner, newest at the top.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 8 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);

    for (idx, toast) in toasts.iter().rev().enumerate() {
        let y = area.y + 1 + idx as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let (color, icon) = match toast.kind {
            ToastKind::Success => (Color::Green, "✓"),
            ToastKind::Error => (Color::Red, "✗"),
            ToastKind::Info => (Color::Cyan, "i"),
        };
        let text = truncate_with_ellipsis(&toast.message, width.saturating_sub(6) as usize);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(text, Style::default().fg(Color::White)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
    }
}
