//! Locale content readers.
//!
//! A [`LocaleReader`] turns a raw stream into a flat key → string map. The
//! [`ReaderRegistry`] binds exactly one reader to each file extension.

mod fluent;
mod json;
pub mod text;
mod yaml;

use std::fmt;
use std::io::Read;
use std::sync::Arc;

pub use fluent::FluentReader;
pub use json::JsonReader;
pub use text::TextReader;
pub use yaml::YamlReader;

use crate::error::{Error, ReaderError, Result};
use crate::store::TranslationMap;

/// Extension the default text reader is bound to.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Parses raw locale content.
///
/// Implementations report problems through the returned error and must not
/// swallow them; the caller attaches locale and extension context.
pub trait LocaleReader: Send + Sync {
    /// Short identity used in error messages.
    fn name(&self) -> &str;

    /// Parse `stream`. `Ok(None)` is treated as an empty map.
    fn parse(&self, stream: &mut dyn Read) -> std::result::Result<Option<TranslationMap>, ReaderError>;
}

/// An `(extension, reader)` pair.
#[derive(Clone)]
pub struct ReaderBinding {
    extension: String,
    reader: Arc<dyn LocaleReader>,
}

impl ReaderBinding {
    /// Bound extension, including the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Bound reader.
    pub fn reader(&self) -> &Arc<dyn LocaleReader> {
        &self.reader
    }
}

impl fmt::Debug for ReaderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderBinding")
            .field("extension", &self.extension)
            .field("reader", &self.reader.name())
            .finish()
    }
}

/// Extension → reader bindings, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ReaderRegistry {
    bindings: Vec<ReaderBinding>,
}

impl ReaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `reader` to `extension`.
    ///
    /// The extension must start with `.`, contain no other dot and be at
    /// least two characters long. Neither the extension nor the reader
    /// instance may already be registered.
    pub fn register(&mut self, reader: Arc<dyn LocaleReader>, extension: &str) -> Result<()> {
        validate_extension(extension)?;

        if self.get(extension).is_some() {
            return Err(Error::config(format!(
                "a reader is already registered for extension '{extension}'"
            )));
        }

        if let Some(existing) = self.bindings.iter().find(|b| Arc::ptr_eq(&b.reader, &reader)) {
            return Err(Error::config(format!(
                "reader '{}' is already registered for extension '{}'",
                existing.reader.name(),
                existing.extension
            )));
        }

        self.bindings.push(ReaderBinding { extension: extension.to_string(), reader });
        Ok(())
    }

    /// Put the text reader at the front unless `.txt` is already bound.
    ///
    /// Returns `true` if a reader was added.
    pub fn ensure_default(&mut self) -> bool {
        if self.get(DEFAULT_EXTENSION).is_some() {
            return false;
        }
        self.bindings.insert(
            0,
            ReaderBinding { extension: DEFAULT_EXTENSION.to_string(), reader: Arc::new(TextReader) },
        );
        true
    }

    /// Reader bound to `extension` (exact, case-sensitive).
    pub fn get(&self, extension: &str) -> Option<&Arc<dyn LocaleReader>> {
        self.bindings.iter().find(|b| b.extension == extension).map(|b| &b.reader)
    }

    /// Registered extensions in order.
    pub fn extensions(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.extension.as_str()).collect()
    }

    /// All bindings in order.
    pub fn bindings(&self) -> &[ReaderBinding] {
        &self.bindings
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no reader is registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::config("reader extension must not be empty"));
    }
    if !extension.starts_with('.') {
        return Err(Error::config(format!("reader extension '{extension}' must start with '.'")));
    }
    if extension.chars().count() < 2 {
        return Err(Error::config(format!(
            "reader extension '{extension}' must be at least 2 characters"
        )));
    }
    if extension.matches('.').count() > 1 {
        return Err(Error::config(format!(
            "reader extension '{extension}' must contain exactly one '.'"
        )));
    }
    Ok(())
}
