//! Host culture detection and normalization.

use std::fmt;

use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// Environment variables consulted by [`Culture::detect`], in order.
pub const CULTURE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// The host's current culture.
///
/// `name` is the full tag (`es-ES`), `language` the language subtag (`es`).
/// The invariant culture has both empty and never matches a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Culture {
    /// Full normalized culture tag.
    pub name: String,
    /// Two-letter (or three-letter) language code.
    pub language: String,
}

impl Culture {
    /// The invariant culture.
    pub fn invariant() -> Self {
        Self::default()
    }

    /// Parse a raw tag, returning `None` for empty, `C`/`POSIX` or malformed input.
    ///
    /// Accepts POSIX forms such as `es_ES.UTF-8` or `sr_RS@latin`.
    pub fn try_parse(raw: &str) -> Option<Self> {
        let normalized = normalize_locale(raw);
        if normalized.is_empty() || normalized == "C" || normalized == "POSIX" {
            return None;
        }
        let langid: LanguageIdentifier = normalized.parse().ok()?;
        let language = langid.language.as_str().to_string();
        if language == "und" {
            return None;
        }
        Some(Self { name: langid.to_string(), language })
    }

    /// Parse a raw tag, falling back to the invariant culture.
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }

    /// Detect the culture from the process environment.
    pub fn detect() -> Self {
        Self::detect_from(|key| std::env::var(key).ok())
    }

    /// Detect the culture using `lookup` in place of the process environment.
    pub fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        CULTURE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find_map(|value| Self::try_parse(&value))
            .unwrap_or_default()
    }

    /// Whether this is the invariant culture.
    pub const fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() { f.write_str("(invariant)") } else { f.write_str(&self.name) }
    }
}

/// Normalize a locale string to BCP 47 form.
///
/// Examples:
/// - "en_US.UTF-8" -> "en-US"
/// - "`sr_RS@latin`" -> "sr-RS"
/// - "en" -> "en"
pub fn normalize_locale(locale: &str) -> String {
    // Remove encoding suffix and modifier (".UTF-8", "@euro")
    let locale = locale.trim().split(['.', '@']).next().unwrap_or_default();

    locale.replace('_', "-")
}
