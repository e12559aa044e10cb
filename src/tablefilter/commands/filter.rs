use crate::commands::{facet_warnings, screen_state, view_result, CmdResult};
use crate::error::Result;
use crate::filter::{BarVisibility, FilterBarHandler};
use crate::model::Record;
use crate::screens::ScreenConfig;

/// One-shot filter: a search text and filter overrides on top of the
/// screen's defaults.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub visibility: BarVisibility,
}

pub fn run(
    records: Option<Vec<Record>>,
    screen: &ScreenConfig,
    request: &FilterRequest,
) -> Result<CmdResult> {
    let mut state = screen_state(records, screen);

    if let Some(search) = &request.search {
        state.on_search_change(search.clone());
    }
    for (key, value) in &request.filters {
        state.on_filter_change(key.clone(), value.clone());
    }
    tracing::debug!(
        screen = %screen.name,
        search = state.search_query(),
        filters = ?state.filters(),
        "filtering screen"
    );

    let warnings = facet_warnings(screen, request.filters.iter().map(|(k, _)| k.as_str()));
    let mut result = view_result(&state, screen, request.visibility);
    result.messages.extend(warnings);
    Ok(result)
}
