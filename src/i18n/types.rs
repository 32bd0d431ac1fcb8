// src/i18n/types.rs
use crate::i18n::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of display languages the dashboard ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Tr,
    En,
}

pub const AVAILABLE_LANGUAGES: &[LanguageCode] = &[LanguageCode::Tr, LanguageCode::En];

impl LanguageCode {
    pub fn code(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::Tr => "Türkçe",
            Self::En => "English",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AVAILABLE_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TranslationError::InvalidLanguage(wanted.into()))
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Substitutes `{0}`, `{1}` .. by position, and bare `{}` in order, in a
/// single pass over `text`. Parameter values are never re-scanned.
/// Placeholders without a matching parameter are kept verbatim.
pub fn format_params(text: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut next = 0;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };

        let slot = &after[..close];
        let param = if slot.is_empty() {
            next += 1;
            params.get(next - 1)
        } else {
            slot.parse::<usize>().ok().and_then(|i| params.get(i))
        };

        match param {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("tr".parse::<LanguageCode>().unwrap(), LanguageCode::Tr);
        assert_eq!(" EN ".parse::<LanguageCode>().unwrap(), LanguageCode::En);
    }

    #[test]
    fn rejects_unsupported_codes() {
        let err = "fr".parse::<LanguageCode>().unwrap_err();
        assert!(matches!(err, TranslationError::InvalidLanguage(ref l) if l == "fr"));
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn default_is_turkish() {
        assert_eq!(LanguageCode::default(), LanguageCode::Tr);
        assert_eq!(LanguageCode::default().to_string(), "tr");
    }

    #[test]
    fn formats_positional_and_bare_params() {
        assert_eq!(format_params("{0} / {1}", &["a", "b"]), "a / b");
        assert_eq!(format_params("{} kWh at {}", &["12", "Site A"]), "12 kWh at Site A");
        assert_eq!(format_params("{1} before {0}", &["x", "y"]), "y before x");
        assert_eq!(format_params("no slots", &["x"]), "no slots");
    }

    #[test]
    fn param_values_are_not_substituted_again() {
        assert_eq!(format_params("{0} {1}", &["{1}", "x"]), "{1} x");
        assert_eq!(format_params("{} and {}", &["{}", "y"]), "{} and y");
    }

    #[test]
    fn unmatched_placeholders_stay_verbatim() {
        assert_eq!(format_params("{0}|{1}", &["a:b"]), "a:b|{1}");
        assert_eq!(format_params("{name} {0}", &["v"]), "{name} v");
        assert_eq!(format_params("open {0", &["v"]), "open {0");
    }
}
