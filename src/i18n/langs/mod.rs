// src/i18n/langs/mod.rs

use crate::core::prelude::*;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Reads `<code>.json`, a flat `{ "key": "text" }` object.
pub fn load_entries(lang: LanguageCode) -> Result<HashMap<String, String>> {
    let filename = format!("{}.json", lang.code());
    let content = Langs::get(&filename).ok_or_else(|| {
        TranslationError::LoadError(format!("File not found: {}", filename))
    })?;

    let content_str = std::str::from_utf8(content.data.as_ref())
        .map_err(|e| TranslationError::LoadError(e.to_string()))?;

    let entries: HashMap<String, String> = serde_json::from_str(content_str)
        .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;

    log::debug!("Loaded {} translations for {}", entries.len(), lang);
    Ok(entries)
}
