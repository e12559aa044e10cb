//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the CLI today).
//!
//! It:
//! - **Resolves screens** by name through the [`ScreenRegistry`]
//! - **Loads records** through the [`RecordSource`] using the screen's
//!   envelope key
//! - **Dispatches** to `commands::*::run` and returns `Result<CmdResult>`
//!
//! It does no filtering itself and never prints.
//!
//! `TableFilterApi<S: RecordSource>` is generic over the source so tests run
//! against `InMemorySource` without touching the filesystem.

use crate::commands;
use crate::config::TableFilterConfig;
use crate::error::{Result, TableFilterError};
use crate::filter::FilterIntent;
use crate::model::Record;
use crate::screens::{ScreenConfig, ScreenRegistry};
use crate::source::RecordSource;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::filter::FilterRequest;
pub use crate::commands::{CmdMessage, CmdResult, FilteredView, MessageLevel};

pub struct TableFilterApi<S: RecordSource> {
    source: S,
    config: TableFilterConfig,
    registry: ScreenRegistry,
    config_dir: PathBuf,
}

impl<S: RecordSource> TableFilterApi<S> {
    pub fn new(source: S, config: TableFilterConfig, config_dir: PathBuf) -> Self {
        let registry = ScreenRegistry::builtin().with_overrides(&config.screens);
        Self {
            source,
            config,
            registry,
            config_dir,
        }
    }

    pub fn config(&self) -> &TableFilterConfig {
        &self.config
    }

    /// Filters a screen's records with a search text and filter overrides.
    ///
    /// The request's bar visibility is replaced by the configured policy.
    pub fn filter(
        &self,
        screen: &str,
        location: &str,
        request: FilterRequest,
    ) -> Result<commands::CmdResult> {
        let (screen, records) = self.load(screen, location)?;
        let request = FilterRequest {
            visibility: self.config.bar_visibility,
            ..request
        };
        commands::filter::run(records, screen, &request)
    }

    /// Replays filter bar intents against a screen.
    pub fn session<I: AsRef<str>>(
        &self,
        screen: &str,
        location: &str,
        lines: &[I],
    ) -> Result<commands::CmdResult> {
        let intents = parse_intents(lines)?;
        let (screen, records) = self.load(screen, location)?;
        commands::session::run(records, screen, intents, self.config.bar_visibility)
    }

    pub fn counts(&self, screen: &str, location: &str) -> Result<commands::CmdResult> {
        let (screen, records) = self.load(screen, location)?;
        commands::counts::run(records, screen)
    }

    pub fn screens(&self, name: Option<&str>) -> Result<commands::CmdResult> {
        commands::screens::run(&self.registry, name)
    }

    pub fn configure(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.config_dir)
    }

    fn load(&self, screen: &str, location: &str) -> Result<(&ScreenConfig, Option<Vec<Record>>)> {
        let screen = self.registry.get(screen)?;
        let records = self.source.load(location, screen.records_key.as_deref())?;
        tracing::info!(
            screen = %screen.name,
            location,
            loaded = records.is_some(),
            "loaded screen data"
        );
        Ok((screen, records))
    }
}

/// Parses intent lines, skipping blanks and `#` comments.
fn parse_intents<I: AsRef<str>>(lines: &[I]) -> Result<Vec<FilterIntent>> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|line| FilterIntent::parse(line).map_err(|e| TableFilterError::Api(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::BarVisibility;
    use crate::source::memory::InMemorySource;
    use serde_json::json;

    fn api() -> TableFilterApi<InMemorySource> {
        let source = InMemorySource::new()
            .with_payload(
                "orders.json",
                json!({"orders": [
                    {"id": 1, "status": "pending", "domain": "x.com"},
                    {"id": 2, "status": "done", "domain": "y.com"}
                ]}),
            )
            .with_payload("loading.json", json!(null));
        TableFilterApi::new(
            source,
            TableFilterConfig::default(),
            PathBuf::from("/nonexistent"),
        )
    }

    fn ids(result: &CmdResult) -> Vec<i64> {
        result
            .view
            .as_ref()
            .unwrap()
            .rows
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn filter_dispatches_with_screen_envelope() {
        let request = FilterRequest {
            filters: vec![("order_status".into(), "completed".into())],
            ..Default::default()
        };
        let result = api().filter("orders", "orders.json", request).unwrap();
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn filter_uses_configured_visibility() {
        let mut config = TableFilterConfig::default();
        config.bar_visibility = BarVisibility::WhenActive;
        let source = InMemorySource::new().with_payload("empty.json", json!([]));
        let api = TableFilterApi::new(source, config, PathBuf::from("/nonexistent"));

        let result = api
            .filter("orders", "empty.json", FilterRequest::default())
            .unwrap();
        assert!(result.view.unwrap().bar.is_none());
    }

    #[test]
    fn session_skips_comments_and_blank_lines() {
        let lines = ["# narrow down", "", "search y", "filter order_status all"];
        let result = api().session("orders", "orders.json", &lines).unwrap();
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn session_rejects_bad_intents_before_loading() {
        let err = api()
            .session("orders", "missing.json", &["sort id"])
            .unwrap_err();
        assert!(matches!(err, TableFilterError::Api(_)));
    }

    #[test]
    fn not_loaded_data_is_empty_view() {
        let result = api()
            .filter("orders", "loading.json", FilterRequest::default())
            .unwrap();
        assert!(result.view.unwrap().rows.is_empty());
    }

    #[test]
    fn unknown_screen_propagates() {
        assert!(matches!(
            api().counts("payouts", "orders.json"),
            Err(TableFilterError::UnknownScreen(_))
        ));
    }

    #[test]
    fn configured_screens_override_builtins() {
        let mut config = TableFilterConfig::default();
        config.screens.push(
            ScreenConfig::new("orders", crate::filter::FilterValues::new()).records_key("orders"),
        );
        let source = InMemorySource::new().with_payload(
            "orders.json",
            json!({"orders": [{"id": 7, "status": "done"}]}),
        );
        let api = TableFilterApi::new(source, config, PathBuf::from("/nonexistent"));

        let result = api.screens(Some("orders")).unwrap();
        assert!(result.screens[0].filter_options.is_empty());
        let filtered = api
            .filter("orders", "orders.json", FilterRequest::default())
            .unwrap();
        assert_eq!(ids(&filtered), vec![7]);
    }
}
