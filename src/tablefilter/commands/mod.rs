use crate::config::TableFilterConfig;
use crate::filter::{BarVisibility, FilterBar, FilterBarView, FilterState};
use crate::model::Record;
use crate::screens::ScreenConfig;
use std::collections::BTreeMap;

pub mod config;
pub mod counts;
pub mod filter;
pub mod init;
pub mod screens;
pub mod session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The filtered rows of a screen plus what is needed to show them.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub rows: Vec<Record>,
    pub total: usize,
    pub bar: Option<FilterBarView>,
    pub columns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: Option<FilteredView>,
    pub counts: Option<BTreeMap<String, usize>>,
    pub screens: Vec<ScreenConfig>,
    pub config: Option<TableFilterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: FilteredView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_counts(mut self, counts: BTreeMap<String, usize>) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_screens(mut self, screens: Vec<ScreenConfig>) -> Self {
        self.screens = screens;
        self
    }

    pub fn with_config(mut self, config: TableFilterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Builds a screen's state: status normalized first, then default filters.
pub(crate) fn screen_state(
    records: Option<Vec<Record>>,
    screen: &ScreenConfig,
) -> FilterState<Record> {
    let records = records.map(|mut rows| {
        if let Some(binding) = &screen.status {
            binding
                .map
                .apply(&mut rows, &binding.source_field, &binding.target_field);
        }
        rows
    });
    FilterState::new(records, &screen.initial_filters)
}

/// Snapshots a state into a result: rows, bar projection and a summary line.
pub(crate) fn view_result(
    state: &FilterState<Record>,
    screen: &ScreenConfig,
    visibility: BarVisibility,
) -> CmdResult {
    let total = state.data().map_or(0, <[Record]>::len);
    let rows: Vec<Record> = state.filtered_data().into_iter().cloned().collect();

    let facets = &screen.filter_options;
    let bar = visibility
        .should_show(total, state.search_query(), state.is_default())
        .then(|| FilterBar::project(state.search_query(), state.filters(), facets));

    let columns = if screen.columns.is_empty() {
        rows.first()
            .or_else(|| state.data().and_then(<[Record]>::first))
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default()
    } else {
        screen.columns.clone()
    };

    let mut result = CmdResult::default();
    let summary = match state.data() {
        None => CmdMessage::info("No data loaded."),
        Some(_) if rows.len() == total => CmdMessage::info(format!("{} records", total)),
        Some(_) => CmdMessage::info(format!("{} of {} records", rows.len(), total)),
    };
    result.add_message(summary);

    result.with_view(FilteredView {
        rows,
        total,
        bar,
        columns,
    })
}

/// Warns about filter keys the screen has no facet for. They still apply.
pub(crate) fn facet_warnings<'a>(
    screen: &ScreenConfig,
    keys: impl IntoIterator<Item = &'a str>,
) -> Vec<CmdMessage> {
    keys.into_iter()
        .filter(|key| !screen.has_facet(key))
        .map(|key| {
            CmdMessage::warning(format!(
                "Screen '{}' has no '{}' facet; filtering on the raw field",
                screen.name, key
            ))
        })
        .collect()
}
