use vigil_core::roster::{self, PageSize, RosterEntry, RosterPage};

/// Roster panel state.
#[derive(Debug, Default)]
pub struct RosterState {
    pub records: Vec<RosterEntry>,
    pub search: String,
    /// Keys go to the search line while set.
    pub search_focused: bool,
    pub page_size: PageSize,
    /// Where the records came from, once loaded.
    pub source_label: Option<String>,
    pub load_error: Option<String>,
}

impl RosterState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// First page of the records matching the current search.
    pub fn page(&self) -> RosterPage<'_> {
        RosterPage::build(&self.records, &self.search, self.page_size)
    }

    pub fn locations(&self) -> Vec<String> {
        roster::locations(&self.records)
    }
}
