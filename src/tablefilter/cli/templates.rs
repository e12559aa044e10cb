//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone
//! files next to this module, so they can be edited and diffed without
//! touching Rust. They are included here as string constants.
//!
//! Conventions:
//!
//! 1. Layout math (column widths, truncation, padding) happens in Rust and
//!    arrives pre-computed. Templates only place text and pick styles.
//! 2. Styles are chosen by semantic name through the `style` filter. When the
//!    choice depends on data, Rust passes the style name as a field rather
//!    than the template branching on it.
//! 3. Line breaks are explicit. Block tags trim their own newlines (`-%}`),
//!    and every emitted line ends with exactly one `\n`.

pub const BAR_TEMPLATE: &str = include_str!("templates/bar.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const SCREENS_TEMPLATE: &str = include_str!("templates/screens.tmp");
pub const COUNTS_TEMPLATE: &str = include_str!("templates/counts.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
