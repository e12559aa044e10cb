//! # Rendering
//!
//! Turns command results into terminal text through the templates in
//! [`super::templates`] and the theme in [`super::styles`].
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware width handling. Templates receive the
//! finished strings plus the semantic style to apply to each.
//!
//! Every `render_*` function takes `use_color` explicitly so tests can assert
//! on plain text.

use super::styles::{names, TABLEFILTER_THEME};
use super::templates::{
    BAR_TEMPLATE, COUNTS_TEMPLATE, SCREENS_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use minijinja::{Environment, Error, Value as TemplateValue};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tablefilter::api::FilteredView;
use tablefilter::filter::{FilterBarView, ALL};
use tablefilter::model::to_match_string;
use tablefilter::screens::ScreenConfig;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

#[derive(Serialize)]
struct BarSelectData {
    label: String,
    value: String,
    choices: String,
}

#[derive(Serialize)]
struct BarData {
    search: String,
    selects: Vec<BarSelectData>,
}

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    header: Vec<String>,
    rows: Vec<Vec<CellData>>,
    gap: &'static str,
}

#[derive(Serialize)]
struct FacetData {
    key: String,
    default: String,
    options: String,
}

#[derive(Serialize)]
struct ScreenData {
    name: String,
    status: Option<String>,
    facets: Vec<FacetData>,
    columns: String,
}

#[derive(Serialize)]
struct ScreensData {
    screens: Vec<ScreenData>,
}

#[derive(Serialize)]
struct CountEntry {
    state: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct CountsData {
    entries: Vec<CountEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

/// Renders an inline template with the theme's `style` filter registered.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: TemplateValue, name: String| -> String {
        TABLEFILTER_THEME.apply(&name, &value.to_string(), use_color)
    });

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

/// Renders the filter bar: search text, one line per facet and the clear control.
pub fn render_bar(bar: &FilterBarView, use_color: bool) -> String {
    let selects = bar
        .selects
        .iter()
        .map(|select| {
            let value = select
                .options
                .iter()
                .find(|o| o.selected)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| select.selected.clone());
            let choices = select
                .options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join("|");
            BarSelectData {
                label: select.label.clone(),
                value,
                choices: format!("({})", choices),
            }
        })
        .collect();

    let data = BarData {
        search: bar.search.clone(),
        selects,
    };

    render_with_color(BAR_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the view's rows as an aligned table, truncating cells to `cell_width`.
pub fn render_table(view: &FilteredView, cell_width: usize, use_color: bool) -> String {
    if view.rows.is_empty() || view.columns.is_empty() {
        return String::new();
    }

    let texts: Vec<Vec<Option<String>>> = view
        .rows
        .iter()
        .map(|row| {
            view.columns
                .iter()
                .map(|col| row.get(col).and_then(cell_text))
                .map(|text| text.map(|t| truncate_to_width(&t, cell_width)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let header = truncate_to_width(col, cell_width).width();
            texts
                .iter()
                .map(|row| row[i].as_deref().map_or(EMPTY_CELL.width(), |t| t.width()))
                .fold(header, usize::max)
        })
        .collect();

    let header = view
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, width)| pad_to_width(&truncate_to_width(col, cell_width), *width))
        .collect();

    let rows = texts
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&widths)
                .map(|(text, width)| match text {
                    Some(text) => CellData {
                        text: pad_to_width(&text, *width),
                        style: names::CELL,
                    },
                    None => CellData {
                        text: pad_to_width(EMPTY_CELL, *width),
                        style: names::EMPTY_CELL,
                    },
                })
                .collect()
        })
        .collect();

    let data = TableData {
        header,
        rows,
        gap: COLUMN_GAP,
    };

    render_with_color(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_screens(screens: &[ScreenConfig], use_color: bool) -> String {
    let screens = screens
        .iter()
        .map(|screen| ScreenData {
            name: screen.name.clone(),
            status: screen
                .status
                .as_ref()
                .map(|b| format!("({} -> {})", b.source_field, b.target_field)),
            facets: screen
                .filter_options
                .iter()
                .map(|spec| FacetData {
                    key: spec.key.clone(),
                    default: screen
                        .initial_filters
                        .get(&spec.key)
                        .unwrap_or(ALL)
                        .to_string(),
                    options: format!(
                        "[{}]",
                        spec.options
                            .iter()
                            .map(|o| o.value.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })
                .collect(),
            columns: screen.columns.join(", "),
        })
        .collect();

    render_with_color(SCREENS_TEMPLATE, &ScreensData { screens }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_counts(counts: &BTreeMap<String, usize>, use_color: bool) -> String {
    let width = counts.keys().map(|k| k.width()).max().unwrap_or(0);
    let entries = counts
        .iter()
        .map(|(state, count)| CountEntry {
            state: state.clone(),
            padding: " ".repeat(width - state.width()),
            count: *count,
        })
        .collect();

    render_with_color(COUNTS_TEMPLATE, &CountsData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_with_color(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Display text of a cell; `None` for null so it renders as the empty marker.
fn cell_text(value: &Value) -> Option<String> {
    to_match_string(value).map(|text| text.replace(['\n', '\r', '\t'], " "))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
