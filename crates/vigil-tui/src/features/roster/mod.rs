//! Roster feature slice.
//!
//! - `state.rs`: loaded records, search term, page size
//! - `update.rs`: key handling and load results
//! - `render.rs`: table, search line and footer

mod render;
mod state;
mod update;

pub use render::render_roster;
pub use state::RosterState;
pub use update::{handle_roster_key, handle_roster_loaded};
