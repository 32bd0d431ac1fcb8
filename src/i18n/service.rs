// i18n/service.rs
use crate::core::constants::TRANSLATION_CACHE_SIZE;
use crate::core::prelude::*;
use crate::i18n::cache::{CacheKey, TranslationCache};
use crate::i18n::langs;
use crate::i18n::types::{format_params, AVAILABLE_LANGUAGES};
use std::collections::HashMap;
use std::sync::Mutex;

/// Static `(language, key) -> text` mapping. Never mutated after load.
pub struct TranslationTable {
    entries: HashMap<LanguageCode, HashMap<String, String>>,
    cache: Mutex<TranslationCache>,
}

impl TranslationTable {
    /// Loads every supported language from the embedded `langs/*.json` files.
    pub fn embedded() -> Result<Self> {
        let mut entries = HashMap::new();
        for &lang in AVAILABLE_LANGUAGES {
            entries.insert(lang, langs::load_entries(lang)?);
        }
        Ok(Self::with_entries(entries))
    }

    pub fn with_entries(entries: HashMap<LanguageCode, HashMap<String, String>>) -> Self {
        Self {
            entries,
            cache: Mutex::new(TranslationCache::new(TRANSLATION_CACHE_SIZE)),
        }
    }

    pub fn empty() -> Self {
        Self::with_entries(HashMap::new())
    }

    /// Missing keys come back verbatim so gaps stay visible in the UI.
    pub fn lookup(&self, lang: LanguageCode, key: &str, params: &[&str]) -> String {
        let cache_key = Self::build_cache_key(lang, key, params);
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::error!("Translation cache mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        };

        if let Some(cached) = cache.get(&cache_key) {
            return cached;
        }

        let text = match self.entries.get(&lang).and_then(|map| map.get(key)) {
            Some(text) => format_params(text, params),
            None => {
                log::debug!("Missing translation [{}] {}", lang, key);
                key.to_string()
            }
        };

        cache.insert(cache_key, text.clone());
        text
    }

    pub fn contains(&self, lang: LanguageCode, key: &str) -> bool {
        self.entries
            .get(&lang)
            .is_some_and(|map| map.contains_key(key))
    }

    pub fn len(&self, lang: LanguageCode) -> usize {
        self.entries.get(&lang).map_or(0, HashMap::len)
    }

    /// (hits, misses)
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.lock().map_or((0, 0), |cache| cache.stats())
    }

    fn build_cache_key(lang: LanguageCode, key: &str, params: &[&str]) -> CacheKey {
        CacheKey {
            lang,
            key: key.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}
