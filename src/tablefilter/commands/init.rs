use crate::commands::{CmdMessage, CmdResult};
use crate::config::{TableFilterConfig, CONFIG_FILENAME};
use crate::error::Result;
use std::path::Path;

/// Writes a default config unless one already exists.
pub fn run(config_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let config_file = config_dir.join(CONFIG_FILENAME);

    if config_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            config_dir.display()
        )));
        return Ok(result.with_config(TableFilterConfig::load(config_dir)?));
    }

    let config = TableFilterConfig::default();
    config.save(config_dir)?;
    tracing::info!(dir = %config_dir.display(), "initialized config");
    result.add_message(CmdMessage::success(format!(
        "Initialized tablefilter config at {}",
        config_dir.display()
    )));
    Ok(result.with_config(config))
}
