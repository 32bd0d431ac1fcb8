// store/persistence.rs - where the chosen language survives restarts

use crate::core::constants::{STORAGE_KEY, STORAGE_SECTION};
use crate::core::prelude::*;
use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value storage for the `language` field only.
pub trait LanguageBackend: Send + Sync + 'static {
    /// `Ok(None)` when nothing usable is stored.
    fn load(&self) -> BoxFuture<'_, Result<Option<LanguageCode>>>;
    fn save(&self, lang: LanguageCode) -> BoxFuture<'_, Result<()>>;
}

/// Keeps `[language] current` in the dashboard TOML file. Other content of
/// the file (comments, other sections) is left untouched.
#[derive(Debug, Clone)]
pub struct TomlBackend {
    path: PathBuf,
}

impl TomlBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<toml_edit::Document>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        content
            .parse::<toml_edit::Document>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", self.path.display(), e)))
    }

    async fn load_inner(&self) -> Result<Option<LanguageCode>> {
        let Some(doc) = self.read_document().await? else {
            return Ok(None);
        };

        let stored = doc
            .get(STORAGE_SECTION)
            .and_then(|section| section.get(STORAGE_KEY))
            .and_then(|value| value.as_str());

        Ok(stored.and_then(|raw| match raw.parse() {
            Ok(lang) => Some(lang),
            Err(e) => {
                log::warn!("Ignoring stored language: {}", e);
                None
            }
        }))
    }

    async fn save_inner(&self, lang: LanguageCode) -> Result<()> {
        let mut doc = self.read_document().await?.unwrap_or_default();
        doc[STORAGE_SECTION][STORAGE_KEY] = toml_edit::value(lang.code());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, doc.to_string()).await?;

        log::debug!("Language '{}' saved to {}", lang, self.path.display());
        Ok(())
    }
}

impl LanguageBackend for TomlBackend {
    fn load(&self) -> BoxFuture<'_, Result<Option<LanguageCode>>> {
        self.load_inner().boxed()
    }

    fn save(&self, lang: LanguageCode) -> BoxFuture<'_, Result<()>> {
        self.save_inner(lang).boxed()
    }
}

/// In-process backend. Used when no config file is available, and by tests
/// to observe commits and inject failures.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    stored: Option<LanguageCode>,
    saves: Vec<LanguageCode>,
    fail_loads: bool,
    fail_saves: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(lang: LanguageCode) -> Self {
        let backend = Self::new();
        backend.lock().stored = Some(lang);
        backend
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.lock().fail_loads = fail;
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    pub fn stored(&self) -> Option<LanguageCode> {
        self.lock().stored
    }

    /// Every successful save, oldest first.
    pub fn saves(&self) -> Vec<LanguageCode> {
        self.lock().saves.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::error!("Memory backend mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }
}

impl LanguageBackend for MemoryBackend {
    fn load(&self) -> BoxFuture<'_, Result<Option<LanguageCode>>> {
        let result = {
            let inner = self.lock();
            if inner.fail_loads {
                Err(AppError::Validation("memory backend unavailable".into()))
            } else {
                Ok(inner.stored)
            }
        };
        futures::future::ready(result).boxed()
    }

    fn save(&self, lang: LanguageCode) -> BoxFuture<'_, Result<()>> {
        let result = {
            let mut inner = self.lock();
            if inner.fail_saves {
                Err(AppError::Validation("memory backend unavailable".into()))
            } else {
                inner.stored = Some(lang);
                inner.saves.push(lang);
                Ok(())
            }
        };
        futures::future::ready(result).boxed()
    }
}
