//! Locale resolution.
//!
//! Picks the single locale to activate from what a provider discovered.
//! Priority is fixed: explicit request, exact culture tag, language-only
//! culture match, configured fallback, first available.

use std::fmt;

use serde::Serialize;

use crate::culture::Culture;
use crate::error::{Error, Result};

/// Which rule selected the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Explicitly requested by the caller.
    Requested,
    /// Exact match on the full culture tag.
    CultureExact,
    /// Match on the culture's language subtag.
    CultureLanguage,
    /// The configured fallback locale.
    Fallback,
    /// First locale in provider order.
    FirstAvailable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Requested => "requested",
            Self::CultureExact => "culture (exact)",
            Self::CultureLanguage => "culture (language only)",
            Self::Fallback => "fallback",
            Self::FirstAvailable => "first available",
        };
        f.write_str(text)
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Locale to activate.
    pub locale: String,
    /// Rule that selected it.
    pub strategy: Strategy,
}

/// Compute the locale to activate.
///
/// `available` is in provider-declared order. An empty `requested` counts as
/// no request.
///
/// ```
/// use locale_kit::{resolve, Culture, Strategy};
///
/// let available = vec!["en".to_string(), "es".to_string()];
/// let picked = resolve(&available, &Culture::parse("pt-BR"), None, Some("en")).unwrap();
/// assert_eq!(picked.locale, "en");
/// assert_eq!(picked.strategy, Strategy::Fallback);
/// ```
pub fn resolve(
    available: &[String],
    culture: &Culture,
    requested: Option<&str>,
    fallback: Option<&str>,
) -> Result<Resolution> {
    let Some(first) = available.first() else {
        return Err(Error::NoLocalesAvailable("the discovered locale set".to_string()));
    };

    let contains = |id: &str| !id.is_empty() && available.iter().any(|a| a == id);
    let pick = |locale: &str, strategy| Ok(Resolution { locale: locale.to_string(), strategy });

    if let Some(requested) = requested.filter(|r| !r.is_empty()) {
        if contains(requested) {
            return pick(requested, Strategy::Requested);
        }
        return Err(Error::locale_not_available(requested, available));
    }

    if contains(&culture.name) {
        return pick(&culture.name, Strategy::CultureExact);
    }

    if contains(&culture.language) {
        return pick(&culture.language, Strategy::CultureLanguage);
    }

    if let Some(fallback) = fallback
        && contains(fallback)
    {
        return pick(fallback, Strategy::Fallback);
    }

    pick(first, Strategy::FirstAvailable)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn locales(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_fallback_beats_first_available() {
        let picked =
            resolve(&locales(&["en", "es"]), &Culture::parse("pt-BR"), None, Some("en")).unwrap();
        assert_eq!(picked.locale, "en");
        assert_eq!(picked.strategy, Strategy::Fallback);
    }

    #[test]
    fn test_language_only_match() {
        let picked = resolve(&locales(&["en", "es"]), &Culture::parse("es-ES"), None, None).unwrap();
        assert_eq!(picked.locale, "es");
        assert_eq!(picked.strategy, Strategy::CultureLanguage);
    }

    #[test]
    fn test_exact_culture_beats_language() {
        let available = locales(&["en", "es", "es-ES"]);
        let picked = resolve(&available, &Culture::parse("es-ES"), None, Some("en")).unwrap();
        assert_eq!(picked.locale, "es-ES");
        assert_eq!(picked.strategy, Strategy::CultureExact);
    }

    #[test]
    fn test_language_beats_fallback() {
        let picked =
            resolve(&locales(&["en", "es"]), &Culture::parse("es-MX"), None, Some("en")).unwrap();
        assert_eq!(picked.locale, "es");
    }

    #[test]
    fn test_first_available_when_nothing_matches() {
        let available = locales(&["es", "en"]);
        let picked = resolve(&available, &Culture::parse("ja-JP"), None, Some("fr")).unwrap();
        assert_eq!(picked.locale, "es");
        assert_eq!(picked.strategy, Strategy::FirstAvailable);

        let picked = resolve(&available, &Culture::invariant(), None, None).unwrap();
        assert_eq!(picked.locale, "es");
    }

    #[test]
    fn test_requested_wins_and_must_exist() {
        let available = locales(&["en", "es"]);
        let picked = resolve(&available, &Culture::parse("en-US"), Some("es"), None).unwrap();
        assert_eq!(picked.strategy, Strategy::Requested);
        assert_eq!(picked.locale, "es");

        let err = resolve(&available, &Culture::parse("en-US"), Some("fr"), Some("en")).unwrap_err();
        assert!(matches!(err, Error::LocaleNotAvailable { ref locale, .. } if locale == "fr"));
    }

    #[test]
    fn test_empty_request_is_ignored() {
        let picked =
            resolve(&locales(&["en", "es"]), &Culture::parse("es-AR"), Some(""), None).unwrap();
        assert_eq!(picked.strategy, Strategy::CultureLanguage);
    }

    #[test]
    fn test_empty_available_is_fatal() {
        let err = resolve(&[], &Culture::parse("en"), Some("en"), Some("en")).unwrap_err();
        assert!(matches!(err, Error::NoLocalesAvailable(_)));
    }
}
