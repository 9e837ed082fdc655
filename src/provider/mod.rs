//! Locale providers.
//!
//! A provider is the only source of truth for which locales exist and where
//! their raw content lives.

mod directory;
mod embedded;

use std::io::Read;

use serde::Serialize;

pub use directory::DirectoryProvider;
pub use embedded::EmbeddedProvider;

use crate::error::Result;

/// One discovered locale: its id and the extension of its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSource {
    /// Locale id (`es`, `es-ES`).
    pub locale: String,
    /// File extension including the leading dot (`.txt`).
    pub extension: String,
}

impl LocaleSource {
    /// Create a locale source.
    pub fn new(locale: impl Into<String>, extension: impl Into<String>) -> Self {
        Self { locale: locale.into(), extension: extension.into() }
    }
}

/// Where locale data lives.
pub trait LocaleProvider: Send + Sync {
    /// Human-readable description of the source, used in errors and logs.
    fn describe(&self) -> String;

    /// Prepare the provider. Called once by `I18n::init`.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Available locales in provider-declared order.
    ///
    /// Fails with `NoLocalesAvailable` when nothing is found.
    fn discover(&self) -> Result<Vec<LocaleSource>>;

    /// Open the raw content of a source returned by [`discover`](Self::discover).
    ///
    /// Both the locale and the extension must match, so a provider holding
    /// `en.txt` and `en.md` opens exactly the file the caller picked a
    /// reader for.
    fn open(&self, source: &LocaleSource) -> Result<Box<dyn Read + '_>>;

    /// Release held resources.
    fn dispose(&mut self) {}
}

/// Split `es-ES.txt` into `("es-ES", ".txt")`.
///
/// Only the last dot counts; names without one, hidden files and empty stems
/// yield `None`.
pub fn split_file_name(name: &str) -> Option<LocaleSource> {
    if name.starts_with('.') {
        return None;
    }
    let dot = name.rfind('.')?;
    let (stem, extension) = name.split_at(dot);
    if stem.is_empty() || extension.len() < 2 {
        return None;
    }
    Some(LocaleSource::new(stem, extension))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("es-ES.txt"), Some(LocaleSource::new("es-ES", ".txt")));
        assert_eq!(split_file_name("en.json"), Some(LocaleSource::new("en", ".json")));
        assert_eq!(split_file_name("README"), None);
        assert_eq!(split_file_name(".hidden.txt"), None);
        assert_eq!(split_file_name("en."), None);
    }
}
