//! Styles for the tablefilter CLI.
//!
//! Templates never name colors. They name what a piece of text *is* (a column
//! header, a facet label, the selected value) through the `style` filter, and
//! this module decides what that looks like. Changing the look means editing
//! the theme below, not the templates.
//!
//! The theme is registered once through `once_cell::sync::Lazy`.
//!
//! A style name missing from the theme renders its text followed by
//! [`MISSING_STYLE_INDICATOR`], so a typo in a template shows up in the output
//! instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const CELL: &str = "cell";
    pub const EMPTY_CELL: &str = "empty-cell";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const COUNT: &str = "count";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style, or only checks the name when color is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{}{}", text, MISSING_STYLE_INDICATOR),
        }
    }
}

pub static TABLEFILTER_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::CELL, Style::new())
        .add(names::EMPTY_CELL, Style::new().color256(240))
        .add(names::LABEL, Style::new().cyan())
        .add(names::VALUE, Style::new().yellow().bold())
        .add(names::MUTED, Style::new().color256(245))
        .add(names::FAINT, Style::new().color256(240))
        .add(names::TITLE, Style::new().bold())
        .add(names::COUNT, Style::new().green())
});
