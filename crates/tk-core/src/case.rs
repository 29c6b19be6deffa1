//! Case conversion with an explicit locale.
//!
//! Nothing here reads the process environment; the same input and locale
//! always produce the same output.

use serde::{Deserialize, Serialize};

/// Locale used for case mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseLocale {
    /// Unicode default mapping, as used for English.
    #[default]
    English,
    /// Turkish/Azeri rules: `i` <-> `İ` and `ı` <-> `I`.
    Turkic,
}

impl CaseLocale {
    /// Uppercase a whole string.
    pub fn to_upper(self, s: &str) -> String {
        match self {
            Self::English => s.to_uppercase(),
            Self::Turkic => s.replace('i', "\u{130}").to_uppercase(),
        }
    }

    /// Lowercase a whole string.
    pub fn to_lower(self, s: &str) -> String {
        match self {
            Self::English => s.to_lowercase(),
            Self::Turkic => s.replace('I', "\u{131}").replace('\u{130}', "i").to_lowercase(),
        }
    }

    /// Append the uppercase form of `c` to `out`. May push more than one char.
    pub fn push_upper(self, out: &mut String, c: char) {
        match (self, c) {
            (Self::Turkic, 'i') => out.push('\u{130}'),
            _ => out.extend(c.to_uppercase()),
        }
    }
}

/// Uppercase `s` with the English mapping.
pub fn to_upper(s: &str) -> String {
    CaseLocale::English.to_upper(s)
}

/// Lowercase `s` with the English mapping.
pub fn to_lower(s: &str) -> String {
    CaseLocale::English.to_lower(s)
}
