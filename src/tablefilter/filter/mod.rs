//! # Filtering engine
//!
//! Two cooperating pieces serve every list screen:
//!
//! - [`FilterState`]: owns search text and filter selection, derives the
//!   filtered view of the screen's records.
//! - [`FilterBar`]: projects that state into a renderable view and turns user
//!   actions into [`FilterIntent`]s for the state's owner.
//!
//! ```text
//!   records ──► FilterState ──► filtered_data() ──► table
//!                  ▲    │
//!        intents   │    │ search / filters
//!                  │    ▼
//!               FilterBar::project ──► FilterBarView ──► UI
//! ```
//!
//! Matching rules live in [`matching`]: a record is kept when some non-null
//! field contains the (trimmed, lowercased) search text and every constrained
//! filter key equals the record's field, case-insensitively. The engine never
//! fails: absent data is an empty collection and missing fields are
//! non-matches.

pub mod bar;
pub mod facet;
pub mod matching;
pub mod state;
pub mod values;

pub use bar::{BarVisibility, FilterBar, FilterBarHandler, FilterBarView, FilterIntent};
pub use facet::{FilterOption, FilterSpec, ALL};
pub use matching::{filter_records, matches_filters, matches_search};
pub use state::FilterState;
pub use values::FilterValues;
