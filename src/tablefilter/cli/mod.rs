//! # CLI Behavior
//!
//! This is **one possible UI client** for tablefilter, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## Commands
//!
//! - `tablefilter filter FILE [--screen S] [-q TEXT] [-f key=value]...`
//!   applies the screen's status mapping and defaults, then the search and
//!   filters, and prints the filter bar plus the matching rows.
//! - `tablefilter session FILE [--script F]` replays filter bar actions, one
//!   per line (`search <text>`, `filter <key> <value>`, `clear`). Only the
//!   final state is printed.
//! - `tablefilter counts FILE` prints records per normalized status.
//! - `tablefilter screens [NAME]`, `config [KEY [VALUE]]`, `init`.
//!
//! `FILE` may be `-` to read the records from stdin. With `--json`, `filter`
//! and `session` print the matching records as JSON and send warnings to
//! stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call API and format output
//! - `logging`: tracing subscriber setup from `-v`
//! - `print`: message output
//! - `render`: template rendering (tables, bar, screens, counts)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling theme
//! - `templates`: Output templates

mod commands;
mod logging;
mod print;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
