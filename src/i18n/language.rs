//! Language descriptors.

use std::fmt;

use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// A discovered locale paired with its display name.
///
/// Derived on every access and never stored apart from the locale list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Locale id.
    pub locale: String,
    /// Name to show users.
    pub display_name: String,
}

impl Language {
    /// Describe `locale`, preferring a translation of the locale id itself.
    ///
    /// Without a translation the native name of the language is used,
    /// first letter capitalized, with the region appended (`Español (ES)`).
    pub fn describe(locale: &str, translated: Option<String>) -> Self {
        let display_name = translated
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| capitalize_first(&native_display_name(locale)));
        Self { locale: locale.to_string(), display_name }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Native name of `locale`, or the locale id itself when unknown.
pub fn native_display_name(locale: &str) -> String {
    let Ok(langid) = locale.parse::<LanguageIdentifier>() else {
        return locale.to_string();
    };
    let Some(native) = native_language_name(langid.language.as_str()) else {
        return locale.to_string();
    };
    match langid.region {
        Some(region) => format!("{native} ({})", region.as_str()),
        None => native.to_string(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn native_language_name(language: &str) -> Option<&'static str> {
    let name = match language {
        "ar" => "العربية",
        "ca" => "català",
        "cs" => "čeština",
        "da" => "dansk",
        "de" => "deutsch",
        "el" => "ελληνικά",
        "en" => "english",
        "es" => "español",
        "eu" => "euskara",
        "fi" => "suomi",
        "fr" => "français",
        "gl" => "galego",
        "he" => "עברית",
        "hi" => "हिन्दी",
        "hu" => "magyar",
        "id" => "indonesia",
        "it" => "italiano",
        "ja" => "日本語",
        "ko" => "한국어",
        "nb" => "norsk bokmål",
        "nl" => "nederlands",
        "pl" => "polski",
        "pt" => "português",
        "ro" => "română",
        "ru" => "русский",
        "sv" => "svenska",
        "th" => "ไทย",
        "tr" => "türkçe",
        "uk" => "українська",
        "vi" => "tiếng việt",
        "zh" => "中文",
        _ => return None,
    };
    Some(name)
}
