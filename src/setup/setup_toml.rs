// =====================================================
// FILE: src/setup/setup_toml.rs
// =====================================================

use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
log_level = "info"

[language]
# Supported: "tr", "en"
current = "tr"

[transition]
# Overlay is shown first, the language swaps behind it after swap_delay_ms
swap_delay_ms = 100
# Overlay stays up this long after the swap before it is hidden
reveal_delay_ms = 1500
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    let base_dir = exe_path.parent().ok_or_else(|| {
        AppError::Validation("Could not determine the program directory".to_string())
    })?;

    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).await?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG).await?;
        log::info!("Config file created: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
