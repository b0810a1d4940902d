//! Roster command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use vigil_core::config::Config;
use vigil_core::roster::{self, PageSize, RosterPage};

const HEADERS: [&str; 7] = [
    "Sr. No.",
    "Location",
    "Team Head",
    "Shift In Charge",
    "Security Staff",
    "Schedule Date",
    "Schedule Time",
];

pub fn run(
    config: &Config,
    search: &str,
    entries: Option<PageSize>,
    file: Option<PathBuf>,
) -> Result<()> {
    let source = roster::source_for(file.or_else(|| config.roster.file_path()));
    let records = source
        .list()
        .with_context(|| format!("load roster from {}", source.describe()))?;
    tracing::info!(source = %source.describe(), count = records.len(), "Roster listed");

    let page = RosterPage::build(&records, search, entries.unwrap_or(config.roster.page_size));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADERS);
    for (idx, entry) in page.rows.iter().enumerate() {
        table.add_row([
            (idx + 1).to_string(),
            entry.location.clone(),
            entry.team_head.clone(),
            entry.shift_in_charge.clone(),
            entry.security_staff.clone(),
            entry.schedule_date.clone(),
            entry.schedule_time.clone(),
        ]);
    }

    println!("{table}");
    println!("{}", page.footer());
    Ok(())
}
