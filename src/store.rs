//! The active translation set.
//!
//! # Invariants
//!
//! 1. **Swap, never merge**: a locale switch replaces the whole map. The new
//!    map is parsed completely before it is installed, so a failed load
//!    leaves the previous locale untouched.
//!
//! 2. **Escapes are resolved at parse time**: lookups return templates as
//!    stored; readers own line-break handling.
//!
//! 3. **Missing keys follow one policy**: [`NotFoundPolicy`] decides between
//!    the sentinel-wrapped key and [`Error::KeyNotFound`] for every lookup,
//!    including enumeration helpers. The `_or_none` variants ignore it.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Read;
use std::sync::Arc;

use crate::enums::{TranslatableEnum, variant_key};
use crate::error::{Error, Result};
use crate::format::format_positional;
use crate::reader::LocaleReader;

/// Flat key → template mapping for one locale.
pub type TranslationMap = HashMap<String, String>;

/// What to do when a key is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundPolicy {
    /// Wrapper placed on both sides of the key.
    pub symbol: String,
    /// Fail instead of wrapping.
    pub throw: bool,
}

impl NotFoundPolicy {
    /// Build the sentinel string for `key`.
    pub fn wrap(&self, key: &str) -> String {
        format!("{symbol}{key}{symbol}", symbol = self.symbol)
    }
}

impl Default for NotFoundPolicy {
    fn default() -> Self {
        Self { symbol: crate::config::DEFAULT_NOT_FOUND_SYMBOL.to_string(), throw: false }
    }
}

/// Holds the active locale id and its translations.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    locale: Option<String>,
    entries: Arc<TranslationMap>,
}

impl TranslationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `stream` with `reader` into a new map.
    ///
    /// Parse failures become [`Error::ReaderFailure`] with the reader name,
    /// `locale` and `extension` attached. A `None` result is an empty map.
    pub fn load(
        reader: &dyn LocaleReader,
        stream: &mut dyn Read,
        locale: &str,
        extension: &str,
    ) -> Result<TranslationMap> {
        reader
            .parse(stream)
            .map(Option::unwrap_or_default)
            .map_err(|source| Error::ReaderFailure {
                reader: reader.name().to_string(),
                locale: locale.to_string(),
                extension: extension.to_string(),
                source,
            })
    }

    /// Install `entries` as the active translations for `locale`.
    pub fn swap(&mut self, locale: impl Into<String>, entries: TranslationMap) {
        self.entries = Arc::new(entries);
        self.locale = Some(locale.into());
    }

    /// Drop the active locale and its translations.
    pub fn clear(&mut self) {
        self.entries = Arc::default();
        self.locale = None;
    }

    /// Active locale id.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Shared handle to the active map.
    pub fn entries(&self) -> Arc<TranslationMap> {
        Arc::clone(&self.entries)
    }

    /// Raw template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has a translation.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the active map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate `key`, formatting `args` into `{0}`-style placeholders.
    ///
    /// With no args the template is returned verbatim.
    pub fn lookup(&self, key: &str, args: &[&dyn Display], policy: &NotFoundPolicy) -> Result<String> {
        match self.lookup_or_none(key, args)? {
            Some(value) => Ok(value),
            None if policy.throw => Err(Error::KeyNotFound {
                key: key.to_string(),
                locale: self.locale.clone().unwrap_or_default(),
            }),
            None => Ok(policy.wrap(key)),
        }
    }

    /// Like [`lookup`](Self::lookup) but `None` for a missing key, whatever the policy.
    pub fn lookup_or_none(&self, key: &str, args: &[&dyn Display]) -> Result<Option<String>> {
        let Some(template) = self.get(key) else {
            return Ok(None);
        };
        if args.is_empty() {
            return Ok(Some(template.to_string()));
        }
        format_positional(template, args)
            .map(Some)
            .map_err(|source| Error::Format { key: key.to_string(), source })
    }

    /// Translate every variant of `E`, in declaration order.
    pub fn to_list<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
        policy: &NotFoundPolicy,
    ) -> Result<Vec<String>> {
        E::VARIANTS
            .iter()
            .map(|(_, name)| self.lookup(&variant_key::<E>(section, name), &[], policy))
            .collect()
    }

    /// Translate every variant of `E` into a variant → text map.
    pub fn to_map<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
        policy: &NotFoundPolicy,
    ) -> Result<HashMap<E, String>> {
        self.to_paired_list::<E>(section, policy).map(|pairs| pairs.into_iter().collect())
    }

    /// Translate every variant of `E` into `(variant, text)` pairs, in declaration order.
    pub fn to_paired_list<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
        policy: &NotFoundPolicy,
    ) -> Result<Vec<(E, String)>> {
        E::VARIANTS
            .iter()
            .map(|&(variant, name)| {
                self.lookup(&variant_key::<E>(section, name), &[], policy).map(|text| (variant, text))
            })
            .collect()
    }
}
