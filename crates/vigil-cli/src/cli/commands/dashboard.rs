//! Dashboard command handler.

use anyhow::Result;
use vigil_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    vigil_tui::run_dashboard(config).await
}
