//! Tuning parameters persisted as TOML next to the binary.
//!
//! A missing file means compile-time defaults; a partial file overrides
//! only the keys it names. Loaded values are re-validated before a session
//! is built, so a hand-edited out-of-range value fails at startup instead
//! of misbehaving mid-session.

use anyhow::{Context, Result};
use flow_core::FlowConfig;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<FlowConfig> {
    let config = match fs::read_to_string(path) {
        Ok(text) => {
            let cfg: FlowConfig =
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
            log::info!("loaded settings from {}", path.display());
            cfg
        }
        Err(_) => {
            log::info!("no settings at {}; using defaults", path.display());
            FlowConfig::default()
        }
    };
    config.validate().context("invalid settings")?;
    Ok(config)
}

pub fn save(path: &Path, config: &FlowConfig) -> Result<()> {
    let text = toml::to_string_pretty(config).context("serializing settings")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved settings to {}", path.display());
    Ok(())
}
