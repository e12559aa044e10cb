use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::screens::ScreenRegistry;

pub fn run(registry: &ScreenRegistry, name: Option<&str>) -> Result<CmdResult> {
    let screens = match name {
        Some(name) => vec![registry.get(name)?.clone()],
        None => registry.screens().to_vec(),
    };

    let mut result = CmdResult::default();
    if screens.is_empty() {
        result.add_message(CmdMessage::info("No screens configured."));
    }
    Ok(result.with_screens(screens))
}
