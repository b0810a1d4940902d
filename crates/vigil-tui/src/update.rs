//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use vigil_core::session::Route;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::toast::Toast;
use crate::mutations::StateMutation;
use crate::overlays::{ModalTransition, ModalUpdate};
use crate::state::{AppState, TuiState};
use crate::{auth, roster};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Task ids are filled in before returning.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.toasts.prune(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.terminal_size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "Ignoring stale task result");
                vec![]
            }
        }
        UiEvent::AuthFinished { action, result } => {
            let outcome = auth::handle_auth_result(&mut app.tui.session, action, result);
            if let Some(toast) = outcome.toast {
                app.tui.toasts.push(toast);
            }
            match outcome.modal {
                auth::ModalAction::Close => {
                    app.modal.close();
                }
                auth::ModalAction::ShowError(error) => {
                    if let Some(form) = app.modal.form_mut() {
                        form.error = Some(error);
                    }
                }
                auth::ModalAction::Keep => {}
            }
            outcome.effects
        }
        UiEvent::AuthCancelled { action } => {
            tracing::debug!(%action, "Auth request cancelled");
            vec![]
        }
        UiEvent::RosterLoaded { source, result } => {
            if let Some(toast) = roster::handle_roster_loaded(&mut app.tui.roster, source, result)
            {
                app.tui.toasts.push(toast);
            }
            vec![]
        }
    };
    assign_task_ids(&mut app.tui, effects)
}

/// Effects to run once before the first frame.
pub fn initial_effects(app: &mut AppState) -> Vec<UiEffect> {
    assign_task_ids(&mut app.tui, vec![UiEffect::LoadRoster { task: None }])
}

fn assign_task_ids(tui: &mut TuiState, effects: Vec<UiEffect>) -> Vec<UiEffect> {
    effects
        .into_iter()
        .map(|effect| match effect {
            UiEffect::SubmitCredentials {
                task: None,
                action,
                credentials,
            } => UiEffect::SubmitCredentials {
                task: Some(tui.task_seq.next_id()),
                action,
                credentials,
            },
            UiEffect::LoadRoster { task: None } => UiEffect::LoadRoster {
                task: Some(tui.task_seq.next_id()),
            },
            other => other,
        })
        .collect()
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

/// Applies mutations. Returns false if a request was refused.
fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) -> bool {
    let mut accepted = true;
    for mutation in mutations {
        match mutation {
            StateMutation::BeginAuthRequest => {
                if !tui.session.begin_request() {
                    tracing::debug!("Auth request already in flight, submit ignored");
                    accepted = false;
                }
            }
        }
    }
    accepted
}

fn apply_modal_update(app: &mut AppState, update: ModalUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    if !apply_mutations(&mut app.tui, update.mutations) {
        effects.retain(|effect| !matches!(effect, UiEffect::SubmitCredentials { .. }));
    }

    match update.transition {
        ModalTransition::Stay => {}
        ModalTransition::Close => {
            effects.extend(cancel_auth_request(&mut app.tui));
            app.modal.close();
        }
        ModalTransition::Switch => {
            effects.extend(cancel_auth_request(&mut app.tui));
            app.modal.switch();
        }
    }
    effects
}

/// Cancels the in-flight auth request, if any, and clears `loading`.
fn cancel_auth_request(tui: &mut TuiState) -> Option<UiEffect> {
    let task = tui.tasks.state_mut(TaskKind::AuthRequest);
    if !tui.session.loading && !task.is_running() {
        return None;
    }
    let token = task.cancel.clone();
    task.clear();
    tui.session.cancel_request();
    tracing::info!("Cancelling in-flight auth request");
    Some(UiEffect::CancelTask {
        kind: TaskKind::AuthRequest,
        token,
    })
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if let Some(form) = app.modal.form_mut() {
                form.focused_mut()
                    .push_str(text.trim_end_matches(['\r', '\n']));
            } else if app.tui.roster.search_focused {
                app.tui.roster.search.push_str(text.trim());
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !app.modal.is_open() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let area = app.tui.modal_area.get();
    if area.is_empty() || area.contains(Position::new(mouse.column, mouse.row)) {
        return vec![];
    }
    apply_modal_update(app, ModalUpdate::close())
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(update) = app.modal.handle_key(&app.tui, key) {
        return apply_modal_update(app, update);
    }

    if app.tui.route.is_dashboard()
        && let Some(mut effects) = roster::handle_roster_key(&mut app.tui.roster, key)
    {
        if app.tui.tasks.state(TaskKind::RosterLoad).is_running() {
            effects.retain(|effect| !matches!(effect, UiEffect::LoadRoster { .. }));
        }
        return effects;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        _ if ctrl => vec![],
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('l') => {
            app.modal.open_login();
            vec![]
        }
        KeyCode::Char('s') => {
            app.modal.open_signup();
            vec![]
        }
        KeyCode::Char('d') if !app.tui.route.is_dashboard() => vec![UiEffect::Navigate {
            route: Route::Dashboard,
        }],
        KeyCode::Char('h') | KeyCode::Esc if app.tui.route != Route::Home => {
            vec![UiEffect::Navigate { route: Route::Home }]
        }
        KeyCode::Char('o') if app.tui.session.authenticated => {
            app.tui.session.sign_out();
            app.tui.toasts.push(Toast::info("Signed out"));
            tracing::info!("Signed out");
            vec![UiEffect::Navigate { route: Route::Home }]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use tokio_util::sync::CancellationToken;
    use vigil_core::auth::{AuthAction, AuthError};
    use vigil_core::config::Config;
    use vigil_core::session::Session;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::features::toast::ToastKind;
    use crate::overlays::Modal;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn press_ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut AppState, column: u16, row: u16) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        )
    }

    /// Opens login, fills valid credentials, submits and starts the task.
    fn submit_login(app: &mut AppState) -> (TaskId, CancellationToken) {
        press(app, KeyCode::Char('l'));
        type_text(app, "a@b.com");
        press(app, KeyCode::Tab);
        type_text(app, "longenough1");

        let effects = press(app, KeyCode::Enter);
        let [
            UiEffect::SubmitCredentials {
                task: Some(id),
                action: AuthAction::Login,
                ..
            },
        ] = effects.as_slice()
        else {
            panic!("expected one submit effect, got {effects:?}");
        };
        let id = *id;
        let token = CancellationToken::new();
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthRequest,
                started: TaskStarted {
                    id,
                    cancel: Some(token.clone()),
                },
            },
        );
        (id, token)
    }

    fn finish(app: &mut AppState, id: TaskId, result: Result<Session, AuthError>) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::AuthRequest,
                completed: TaskCompleted {
                    id,
                    result: Box::new(UiEvent::AuthFinished {
                        action: AuthAction::Login,
                        result,
                    }),
                },
            },
        )
    }

    #[test]
    fn test_login_success_navigates_exactly_once() {
        let mut app = app();
        let (id, _token) = submit_login(&mut app);
        assert!(app.tui.session.loading);

        let effects = finish(&mut app, id, Ok(Session::authenticated()));

        assert!(app.tui.session.authenticated);
        assert!(!app.tui.session.loading);
        assert!(!app.modal.is_open());
        assert_eq!(app.tui.toasts.count(ToastKind::Success), 1);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Navigate {
                route: Route::Dashboard
            }]
        ));
    }

    #[test]
    fn test_rejected_login_shows_one_error_toast() {
        let mut app = app();
        let (id, _token) = submit_login(&mut app);

        let effects = finish(&mut app, id, Err(AuthError::Rejected { status: 401 }));

        assert!(effects.is_empty());
        assert!(!app.tui.session.authenticated);
        assert!(!app.tui.session.loading);
        assert!(matches!(app.modal, Modal::Login(_)));
        assert_eq!(app.tui.toasts.count(ToastKind::Error), 1);
        assert_eq!(app.tui.toasts.len(), 1);
    }

    #[test]
    fn test_short_password_stays_inline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "short");

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert!(!app.tui.session.loading);
        assert_eq!(
            app.modal.form().and_then(|f| f.error.as_deref()),
            Some("Password must be at least 8 characters")
        );
        assert!(app.tui.toasts.is_empty());
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut app = app();
        submit_login(&mut app);

        let effects = press(&mut app, KeyCode::Enter);
        assert!(effects.is_empty());
        assert_eq!(
            app.modal.form().and_then(|f| f.error.as_deref()),
            Some("Request in progress...")
        );
    }

    #[test]
    fn test_reducer_refuses_submit_while_loading() {
        let mut app = app();
        app.modal.open_login();
        app.tui.session.loading = true;

        let update = ModalUpdate::stay()
            .with_mutations(vec![StateMutation::BeginAuthRequest])
            .with_ui_effects(vec![UiEffect::SubmitCredentials {
                task: None,
                action: AuthAction::Login,
                credentials: vigil_core::validate::Credentials::new("a@b.com", "longenough1"),
            }]);
        assert!(apply_modal_update(&mut app, update).is_empty());
    }

    #[test]
    fn test_switch_clears_fields_and_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        type_text(&mut app, "bad");
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.form().unwrap().error.is_some());

        press_ctrl(&mut app, 't');

        let Modal::Signup(form) = &app.modal else {
            panic!("expected signup modal");
        };
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_close_cancels_in_flight_request() {
        let mut app = app();
        let (id, token) = submit_login(&mut app);

        let effects = press(&mut app, KeyCode::Esc);

        assert!(!app.modal.is_open());
        assert!(!app.tui.session.loading);
        match effects.as_slice() {
            [UiEffect::CancelTask {
                kind: TaskKind::AuthRequest,
                token: Some(sent),
            }] => {
                sent.cancel();
                assert!(token.is_cancelled());
            }
            other => panic!("unexpected effects: {other:?}"),
        }

        // The late result is stale.
        let effects = finish(&mut app, id, Ok(Session::authenticated()));
        assert!(effects.is_empty());
        assert!(!app.tui.session.authenticated);
        assert!(app.tui.toasts.is_empty());
    }

    #[test]
    fn test_click_outside_modal_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        app.tui.modal_area.set(Rect::new(10, 5, 30, 10));

        click(&mut app, 15, 8);
        assert!(app.modal.is_open());

        click(&mut app, 2, 2);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_sign_out_resets_and_goes_home() {
        let mut app = app();
        app.tui.session = Session::authenticated();
        app.tui.route = Route::Dashboard;

        let effects = press(&mut app, KeyCode::Char('o'));

        assert!(!app.tui.session.authenticated);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Navigate { route: Route::Home }]
        ));
    }

    #[test]
    fn test_initial_load_and_reload_get_task_ids() {
        let mut app = app();
        let effects = initial_effects(&mut app);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadRoster { task: Some(_) }]
        ));

        app.tui.route = Route::Dashboard;
        let effects = press(&mut app, KeyCode::Char('r'));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadRoster { task: Some(_) }]
        ));
    }

    #[test]
    fn test_roster_loaded_updates_records() {
        let mut app = app();
        let records = vigil_core::roster::StaticRoster::seed();
        let records = vigil_core::roster::RosterSource::list(&records).unwrap();
        update(
            &mut app,
            UiEvent::RosterLoaded {
                source: "built-in roster".into(),
                result: Ok(records),
            },
        );
        assert_eq!(app.tui.roster.page().footer(), "Showing 3 of 3 entries");
    }

    #[test]
    fn test_clearing_search_restores_full_footer() {
        let mut app = app();
        app.tui.route = Route::Dashboard;
        app.tui.roster.records = vigil_core::roster::RosterSource::list(
            &vigil_core::roster::StaticRoster::seed(),
        )
        .unwrap();

        press(&mut app, KeyCode::Char('/'));
        for c in "patratu".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.tui.roster.page().footer(), "Showing 1 of 1 entries");

        press_ctrl(&mut app, 'u');
        assert_eq!(app.tui.roster.page().footer(), "Showing 3 of 3 entries");

        for c in "angul".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(press(&mut app, KeyCode::Esc).is_empty());
        assert_eq!(app.tui.route, Route::Dashboard);
        assert_eq!(app.tui.roster.page().footer(), "Showing 3 of 3 entries");

        assert!(matches!(
            press(&mut app, KeyCode::Esc).as_slice(),
            [UiEffect::Navigate { route: Route::Home }]
        ));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')).as_slice(),
            [UiEffect::Quit]
        ));
        assert!(matches!(press_ctrl(&mut app, 'c').as_slice(), [UiEffect::Quit]));
    }
}
