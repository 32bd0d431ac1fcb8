// src/i18n/mod.rs
pub mod cache;
pub mod error;
pub mod langs;
pub mod service;
pub mod types;

pub use cache::{CacheKey, TranslationCache};
pub use error::TranslationError;
pub use service::TranslationTable;
pub use types::{format_params, LanguageCode, AVAILABLE_LANGUAGES};

pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Tr;

#[macro_export]
macro_rules! t {
    ($store:expr, $key:expr) => { $store.translate($key) };
    ($store:expr, $key:expr, $($arg:expr),+) => { $store.translate_with($key, &[$($arg),+]) };
}
