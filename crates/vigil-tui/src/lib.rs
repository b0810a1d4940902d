//! Full-screen dashboard for Night Vigilance.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stdout};
use std::sync::Arc;

use anyhow::Result;
pub use features::{auth, navbar, roster, toast};
pub use runtime::TuiRuntime;
use vigil_core::auth::AuthClient;
use vigil_core::config::Config;
use vigil_core::roster::{self as core_roster, RosterSource};

/// Runs the interactive dashboard until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the HTTP client cannot be
/// built, or terminal I/O fails.
pub async fn run_dashboard(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `vigil roster` for non-interactive output."
        );
    }

    let client = AuthClient::new(&config.api)?;
    let source: Arc<dyn RosterSource> =
        Arc::from(core_roster::source_for(config.roster.file_path()));
    tracing::info!(
        base_url = client.base_url(),
        roster = %source.describe(),
        "Starting dashboard"
    );

    {
        let mut runtime = TuiRuntime::new(config.clone(), client, source)?;
        runtime.run()?;
    }

    writeln!(stdout(), "Goodbye!")?;
    Ok(())
}
