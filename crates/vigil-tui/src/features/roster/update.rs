//! Roster reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vigil_core::roster::RosterEntry;

use super::RosterState;
use crate::effects::UiEffect;
use crate::features::toast::Toast;

/// Handles a key on a dashboard route.
///
/// Returns `None` when the key is not a roster key, so global bindings apply.
pub fn handle_roster_key(roster: &mut RosterState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if roster.search_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => roster.search_focused = false,
            KeyCode::Backspace => {
                roster.search.pop();
            }
            KeyCode::Char('u') if ctrl => roster.search.clear(),
            KeyCode::Char(c) if !ctrl => roster.search.push(c),
            _ => return None,
        }
        return Some(vec![]);
    }

    match key.code {
        KeyCode::Char('/') => roster.search_focused = true,
        KeyCode::Esc if !roster.search.is_empty() => roster.search.clear(),
        KeyCode::Tab | KeyCode::Char('+') => roster.page_size = roster.page_size.next(),
        KeyCode::BackTab | KeyCode::Char('-') => roster.page_size = roster.page_size.prev(),
        KeyCode::Char('r') if !ctrl => return Some(vec![UiEffect::LoadRoster { task: None }]),
        _ => return None,
    }
    Some(vec![])
}

/// Applies a roster load result. Returns a toast for failures.
pub fn handle_roster_loaded(
    roster: &mut RosterState,
    source: String,
    result: Result<Vec<RosterEntry>, String>,
) -> Option<Toast> {
    match result {
        Ok(records) => {
            tracing::info!(source = %source, count = records.len(), "Roster loaded");
            roster.records = records;
            roster.load_error = None;
            roster.source_label = Some(source);
            None
        }
        Err(error) => {
            tracing::error!(source = %source, error = %error, "Roster load failed");
            roster.load_error = Some(error);
            roster.source_label = Some(source);
            Some(Toast::error("Failed to load roster"))
        }
    }
}
