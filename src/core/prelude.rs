// src/core/prelude.rs

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

pub use std::time::Duration;

pub use crate::i18n::{LanguageCode, TranslationError};
