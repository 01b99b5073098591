// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins: an explicit directory, `--config-dir`,
//! `FOLIO_CONFIG_DIR`, then the platform config directory plus `Folio`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Folio";

pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

/// Resolves the settings directory; `None` only when the platform has no
/// config directory and nothing overrides it.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}
