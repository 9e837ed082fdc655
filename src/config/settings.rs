//! Engine settings.
//!
//! Populated once before [`I18n::init`](crate::I18n::init); the builder
//! chains cosmetically but the result is a plain record.

use std::fmt;
use std::path::PathBuf;

use crate::culture::Culture;
use crate::log::Logger;

/// Default wrapper for untranslated keys.
pub const DEFAULT_NOT_FOUND_SYMBOL: &str = "?";

/// Default resources folder scanned by the directory provider.
pub const DEFAULT_LOCALES_FOLDER: &str = "Locales";

/// Configuration for an [`I18n`](crate::I18n) instance.
///
/// ```
/// use locale_kit::Settings;
///
/// let settings = Settings::builder()
///     .fallback_locale("en")
///     .throw_when_key_not_found(true)
///     .build();
/// assert_eq!(settings.not_found_symbol, "?");
/// ```
#[derive(Clone, bon::Builder)]
pub struct Settings {
    /// Wrapper placed on both sides of a key that has no translation.
    #[builder(into, default = DEFAULT_NOT_FOUND_SYMBOL.to_string())]
    pub not_found_symbol: String,

    /// Fail with `KeyNotFound` instead of returning the wrapped key.
    #[builder(default)]
    pub throw_when_key_not_found: bool,

    /// Locale used when the host culture matches nothing.
    #[builder(into)]
    pub fallback_locale: Option<String>,

    /// Folder scanned when no provider is set explicitly.
    #[builder(into, default = PathBuf::from(DEFAULT_LOCALES_FOLDER))]
    pub locales_folder: PathBuf,

    /// Host culture override; detected from the environment when absent.
    pub culture: Option<Culture>,

    /// Optional sink for internal log lines.
    pub logger: Option<Logger>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("not_found_symbol", &self.not_found_symbol)
            .field("throw_when_key_not_found", &self.throw_when_key_not_found)
            .field("fallback_locale", &self.fallback_locale)
            .field("locales_folder", &self.locales_folder)
            .field("culture", &self.culture)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.not_found_symbol, "?");
        assert!(!settings.throw_when_key_not_found);
        assert!(settings.fallback_locale.is_none());
        assert_eq!(settings.locales_folder, PathBuf::from("Locales"));
        assert!(settings.culture.is_none());
        assert!(settings.logger.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let settings = Settings::builder()
            .not_found_symbol("##")
            .throw_when_key_not_found(true)
            .fallback_locale("en")
            .locales_folder("i18n")
            .culture(Culture::parse("es-ES"))
            .logger(Arc::new(|_: &str| {}))
            .build();

        assert_eq!(settings.not_found_symbol, "##");
        assert!(settings.throw_when_key_not_found);
        assert_eq!(settings.fallback_locale.as_deref(), Some("en"));
        assert_eq!(settings.locales_folder, PathBuf::from("i18n"));
        assert_eq!(settings.culture.as_ref().map(|c| c.language.as_str()), Some("es"));
        assert!(format!("{settings:?}").contains("logger: true"));
    }
}
