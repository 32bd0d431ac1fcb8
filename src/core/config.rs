// src/core/config.rs
use crate::core::constants::{
    DEFAULT_REVEAL_DELAY_MS, DEFAULT_SWAP_DELAY_MS, MAX_TRANSITION_DELAY_MS,
};
use crate::core::prelude::*;
use crate::core::constants::{STORAGE_KEY, STORAGE_SECTION};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    language: LanguageConfig,
    #[serde(default)]
    transition: TransitionConfigToml,
}

#[derive(Debug, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct LanguageConfig {
    #[serde(default = "default_language")]
    current: String,
}

#[derive(Debug, Deserialize)]
struct TransitionConfigToml {
    #[serde(default = "default_swap_delay")]
    swap_delay_ms: u64,
    #[serde(default = "default_reveal_delay")]
    reveal_delay_ms: u64,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_language() -> String {
    LanguageCode::default().code().into()
}
fn default_swap_delay() -> u64 {
    DEFAULT_SWAP_DELAY_MS
}
fn default_reveal_delay() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

crate::impl_default!(GeneralConfig, GeneralConfig {
    log_level: default_log_level(),
});
crate::impl_default!(LanguageConfig, LanguageConfig {
    current: default_language(),
});
crate::impl_default!(TransitionConfigToml, TransitionConfigToml {
    swap_delay_ms: default_swap_delay(),
    reveal_delay_ms: default_reveal_delay(),
});

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub log_level: String,
    pub language: LanguageCode,
    pub swap_delay: Duration,
    pub reveal_delay: Duration,
}

impl Config {
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        Self::log_startup(&config);
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;
        Self::log_startup(&config);
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let swap = Self::clamp(file.transition.swap_delay_ms, DEFAULT_SWAP_DELAY_MS);
        let reveal = Self::clamp(file.transition.reveal_delay_ms, DEFAULT_REVEAL_DELAY_MS);

        let language = file.language.current.parse().unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, LanguageCode::default());
            LanguageCode::default()
        });

        let config = Self {
            config_path: Some(path.as_ref().to_path_buf()),
            log_level: file.general.log_level,
            language,
            swap_delay: Duration::from_millis(swap),
            reveal_delay: Duration::from_millis(reveal),
        };

        // Auto-save corrected values
        if swap != file.transition.swap_delay_ms || reveal != file.transition.reveal_delay_ms {
            if let Err(e) = config.save().await {
                log::warn!("Could not write corrected transition delays: {}", e);
            }
        }

        Ok(config)
    }

    /// Updates `[general]` and `[transition]` in place, keeping comments and
    /// layout. The language is owned by the language store's backend and is
    /// only written when the file has none yet.
    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let mut doc = if path.exists() {
            tokio::fs::read_to_string(path)
                .await?
                .parse::<toml_edit::Document>()
                .map_err(|e| AppError::Config(format!("TOML: {}", e)))?
        } else {
            toml_edit::Document::new()
        };

        doc["general"]["log_level"] = toml_edit::value(self.log_level.as_str());
        doc["transition"]["swap_delay_ms"] =
            toml_edit::value(self.swap_delay.as_millis() as i64);
        doc["transition"]["reveal_delay_ms"] =
            toml_edit::value(self.reveal_delay.as_millis() as i64);

        let has_language = doc
            .get(STORAGE_SECTION)
            .and_then(|section| section.get(STORAGE_KEY))
            .is_some();
        if !has_language {
            doc[STORAGE_SECTION][STORAGE_KEY] = toml_edit::value(self.language.code());
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, doc.to_string()).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn clamp(value: u64, default: u64) -> u64 {
        if value > MAX_TRANSITION_DELAY_MS {
            default
        } else {
            value
        }
    }

    fn log_startup(config: &Config) {
        log::info!("Energy Dashboard v{}", crate::core::constants::VERSION);
        log::debug!(
            "Transition: swap after {}ms, reveal after {}ms",
            config.swap_delay.as_millis(),
            config.reveal_delay.as_millis()
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            language: LanguageCode::default(),
            swap_delay: Duration::from_millis(DEFAULT_SWAP_DELAY_MS),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}
