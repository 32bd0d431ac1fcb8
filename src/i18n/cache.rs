// src/i18n/cache.rs
use crate::i18n::types::LanguageCode;
use std::collections::HashMap;

/// One lookup: language, key and the exact parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub lang: LanguageCode,
    pub key: String,
    pub params: Vec<String>,
}

pub struct TranslationCache {
    entries: HashMap<CacheKey, String>,
    hits: usize,
    misses: usize,
    max_size: usize,
}

impl TranslationCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
            max_size,
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<String> {
        if let Some(value) = self.entries.get(key) {
            self.hits += 1;
            Some(value.clone())
        } else {
            self.misses += 1;
            None
        }
    }

    pub fn insert(&mut self, key: CacheKey, value: String) {
        if self.entries.len() >= self.max_size {
            self.entries.clear();
            log::debug!("Translation cache cleared due to size limit");
        }
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses)
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
