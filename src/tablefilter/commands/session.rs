//! Replays a sequence of filter bar intents against one screen.
//!
//! Only the final `(data, search, filters)` triple decides the output, so a
//! UI that drops intermediate frames while the user types gets the same view.

use crate::commands::{facet_warnings, screen_state, view_result, CmdResult};
use crate::error::Result;
use crate::filter::{BarVisibility, FilterIntent};
use crate::model::Record;
use crate::screens::ScreenConfig;

pub fn run(
    records: Option<Vec<Record>>,
    screen: &ScreenConfig,
    intents: Vec<FilterIntent>,
    visibility: BarVisibility,
) -> Result<CmdResult> {
    let mut state = screen_state(records, screen);
    let mut touched_keys = Vec::new();

    for intent in intents {
        tracing::debug!(screen = %screen.name, ?intent, "applying intent");
        if let FilterIntent::FilterChanged { key, .. } = &intent {
            if !touched_keys.contains(key) {
                touched_keys.push(key.clone());
            }
        }
        intent.dispatch(&mut state);
    }

    let mut result = view_result(&state, screen, visibility);
    result
        .messages
        .extend(facet_warnings(screen, touched_keys.iter().map(String::as_str)));
    Ok(result)
}
