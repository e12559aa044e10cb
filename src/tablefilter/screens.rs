//! # Screens
//!
//! Each dashboard list screen declares its facets, its default selection, the
//! columns it shows, and optionally how its raw status field is normalized.
//! The declarations below are the built-in screens; configured screens with
//! the same name replace them wholesale.

use crate::error::{Result, TableFilterError};
use crate::filter::{FilterSpec, FilterValues};
use crate::status::StatusMap;
use serde::{Deserialize, Serialize};

/// How a screen derives its display status before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBinding {
    pub source_field: String,
    pub target_field: String,
    pub map: StatusMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub name: String,
    #[serde(default)]
    pub filter_options: Vec<FilterSpec>,
    /// Required: screens disagree on their defaults, so none is implied.
    pub initial_filters: FilterValues,
    #[serde(default)]
    pub status: Option<StatusBinding>,
    /// Columns shown in tables; empty means every field of the first record.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Key of the record array inside an API envelope, e.g. `"orders"`.
    #[serde(default)]
    pub records_key: Option<String>,
}

impl ScreenConfig {
    pub fn new(name: impl Into<String>, initial_filters: FilterValues) -> Self {
        Self {
            name: name.into(),
            filter_options: Vec::new(),
            initial_filters,
            status: None,
            columns: Vec::new(),
            records_key: None,
        }
    }

    pub fn facet(mut self, spec: FilterSpec) -> Self {
        self.filter_options.push(spec);
        self
    }

    pub fn status(
        mut self,
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        map: StatusMap,
    ) -> Self {
        self.status = Some(StatusBinding {
            source_field: source_field.into(),
            target_field: target_field.into(),
            map,
        });
        self
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn records_key(mut self, key: impl Into<String>) -> Self {
        self.records_key = Some(key.into());
        self
    }

    /// Whether `key` names one of this screen's facets.
    pub fn has_facet(&self, key: &str) -> bool {
        self.filter_options.iter().any(|f| f.key == key)
    }
}

fn order_status_facet() -> FilterSpec {
    FilterSpec::new("order_status", "Status")
        .with_all("All statuses")
        .option("pending", "Pending")
        .option("in_progress", "In progress")
        .option("in_review", "In review")
        .option("completed", "Completed")
        .option("rejected", "Rejected")
}

fn link_type_facet() -> FilterSpec {
    FilterSpec::new("link_type", "Link type")
        .with_all("All types")
        .option("dofollow", "Dofollow")
        .option("nofollow", "Nofollow")
}

fn content_type_facet() -> FilterSpec {
    FilterSpec::new("content_type", "Content")
        .with_all("All content")
        .option("guest_post", "Guest post")
        .option("link_insertion", "Link insertion")
}

/// The screens every installation starts with.
pub fn builtin_screens() -> Vec<ScreenConfig> {
    vec![
        ScreenConfig::new("orders", FilterValues::new().with("order_status", "all"))
            .facet(order_status_facet())
            .facet(content_type_facet())
            .facet(link_type_facet())
            .status("status", "order_status", StatusMap::orders())
            .columns(&["id", "domain", "content_type", "order_status", "price"])
            .records_key("orders"),
        ScreenConfig::new(
            "completed-orders",
            FilterValues::new().with("order_status", "completed"),
        )
        .facet(order_status_facet())
        .facet(content_type_facet())
        .status("status", "order_status", StatusMap::orders())
        .columns(&["id", "domain", "content_type", "order_status", "completed_at"])
        .records_key("orders"),
        ScreenConfig::new("tasks", FilterValues::new().with("task_status", "all"))
            .facet(
                FilterSpec::new("task_status", "Status")
                    .with_all("All statuses")
                    .option("pending", "Pending")
                    .option("in_progress", "In progress")
                    .option("in_review", "In review")
                    .option("completed", "Completed")
                    .option("rejected", "Rejected"),
            )
            .facet(content_type_facet())
            .status("status", "task_status", StatusMap::tasks())
            .columns(&["id", "title", "writer", "task_status", "deadline"])
            .records_key("tasks"),
        ScreenConfig::new("transactions", FilterValues::new())
            .facet(
                FilterSpec::new("type", "Type")
                    .with_all("All types")
                    .option("deposit", "Deposit")
                    .option("withdrawal", "Withdrawal")
                    .option("payment", "Payment")
                    .option("refund", "Refund"),
            )
            .facet(
                FilterSpec::new("tx_status", "Status")
                    .with_all("All statuses")
                    .option("pending", "Pending")
                    .option("completed", "Completed")
                    .option("failed", "Failed")
                    .option("refunded", "Refunded"),
            )
            .status("status", "tx_status", StatusMap::transactions())
            .columns(&["id", "type", "amount", "tx_status", "created_at"])
            .records_key("transactions"),
        ScreenConfig::new("sites", FilterValues::new().with("category", "all"))
            .facet(
                FilterSpec::new("category", "Category")
                    .with_all("All categories")
                    .option("tech", "Technology")
                    .option("finance", "Finance")
                    .option("health", "Health")
                    .option("travel", "Travel"),
            )
            .facet(link_type_facet())
            .facet(
                FilterSpec::new("approved", "Approval")
                    .with_all("Any")
                    .option("true", "Approved")
                    .option("false", "Not approved"),
            )
            .columns(&["id", "domain", "category", "link_type", "da", "price"])
            .records_key("sites"),
        ScreenConfig::new("notifications", FilterValues::new().with("state", "all"))
            .facet(
                FilterSpec::new("state", "State")
                    .with_all("All")
                    .option("unread", "Unread")
                    .option("read", "Read"),
            )
            .facet(
                FilterSpec::new("kind", "Kind")
                    .with_all("All kinds")
                    .option("order", "Order")
                    .option("task", "Task")
                    .option("payment", "Payment")
                    .option("system", "System"),
            )
            .status("is_read", "state", StatusMap::notifications())
            .columns(&["id", "kind", "message", "state", "created_at"])
            .records_key("notifications"),
    ]
}

/// Built-in screens overlaid with configured ones.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: Vec<ScreenConfig>,
}

impl ScreenRegistry {
    pub fn builtin() -> Self {
        Self {
            screens: builtin_screens(),
        }
    }

    /// Applies configured screens: same name replaces, new names append.
    pub fn with_overrides(mut self, overrides: &[ScreenConfig]) -> Self {
        for screen in overrides {
            match self.screens.iter_mut().find(|s| s.name == screen.name) {
                Some(existing) => *existing = screen.clone(),
                None => self.screens.push(screen.clone()),
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Result<&ScreenConfig> {
        self.screens
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| TableFilterError::UnknownScreen(name.to_string()))
    }

    pub fn screens(&self) -> &[ScreenConfig] {
        &self.screens
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
