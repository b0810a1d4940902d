//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session      (auth status, loading flag)
//! │   ├── route: Route          (visible page)
//! │   ├── roster: RosterState   (records, search, page size)
//! │   ├── toasts: Toasts
//! │   ├── task_seq / tasks      (async task lifecycle)
//! │   └── config: Config
//! └── modal: Modal              (closed, login or signup)
//! ```
//!
//! The modal lives beside `TuiState` so its key handler can take `&mut self`
//! while reading `&TuiState`.

use std::cell::Cell;

use ratatui::layout::Rect;
use vigil_core::config::Config;
use vigil_core::session::{Route, Session};

use crate::common::{TaskSeq, Tasks};
use crate::features::roster::RosterState;
use crate::features::toast::Toasts;
use crate::overlays::Modal;

pub struct AppState {
    pub tui: TuiState,
    pub modal: Modal,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            modal: Modal::default(),
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub session: Session,
    pub route: Route,
    pub roster: RosterState,
    pub toasts: Toasts,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub config: Config,
    /// Terminal size from the latest `Frame` event.
    pub terminal_size: (u16, u16),
    /// Outer box of the open modal, set during render for mouse hit-testing.
    pub modal_area: Cell<Rect>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            route: Route::default(),
            roster: RosterState::new(config.roster.page_size),
            toasts: Toasts::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            config,
            terminal_size: (0, 0),
            modal_area: Cell::new(Rect::default()),
            spinner_frame: 0,
        }
    }
}
