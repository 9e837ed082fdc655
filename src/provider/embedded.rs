//! In-memory provider for content compiled into the binary.

use std::borrow::Cow;
use std::io::{Cursor, Read};

use super::{LocaleProvider, LocaleSource};
use crate::error::{Error, Result};

/// Serves locale content held in memory, in insertion order.
///
/// ```
/// use locale_kit::EmbeddedProvider;
///
/// let provider = EmbeddedProvider::new()
///     .with_locale("en", ".txt", "hello = Hello")
///     .with_locale("es", ".txt", "hello = Hola");
/// # let _ = provider;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedProvider {
    entries: Vec<(LocaleSource, Cow<'static, [u8]>)>,
}

impl EmbeddedProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale. Duplicate ids are reported when `I18n::init` discovers them.
    pub fn with_locale(
        mut self,
        locale: impl Into<String>,
        extension: impl Into<String>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        let bytes = match content.into() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        };
        self.entries.push((LocaleSource::new(locale, extension), bytes));
        self
    }

    fn locales(&self) -> Vec<String> {
        self.entries.iter().map(|(source, _)| source.locale.clone()).collect()
    }
}

impl LocaleProvider for EmbeddedProvider {
    fn describe(&self) -> String {
        "embedded resources".to_string()
    }

    fn discover(&self) -> Result<Vec<LocaleSource>> {
        if self.entries.is_empty() {
            return Err(Error::NoLocalesAvailable(self.describe()));
        }
        Ok(self.entries.iter().map(|(source, _)| source.clone()).collect())
    }

    fn open(&self, source: &LocaleSource) -> Result<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == source)
            .map(|(_, bytes)| Box::new(Cursor::new(&**bytes)) as Box<dyn Read + '_>)
            .ok_or_else(|| Error::locale_not_available(&source.locale, &self.locales()))
    }

    fn dispose(&mut self) {
        self.entries.clear();
    }
}
