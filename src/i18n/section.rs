//! Key-prefix scoped views.

use std::fmt::Display;

use super::I18n;
use crate::error::Result;

/// Lookups under a fixed `name.` prefix.
///
/// Holds no state of its own; every call goes through the owning [`I18n`],
/// so it always reflects the active locale and not-found policy.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    i18n: &'a I18n,
    name: &'a str,
}

impl<'a> Section<'a> {
    pub(super) const fn new(i18n: &'a I18n, name: &'a str) -> Self {
        Self { i18n, name }
    }

    /// Section name.
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Full key for `key` inside this section.
    pub fn key(&self, key: &str) -> String {
        format!("{}.{key}", self.name)
    }

    /// Translate `name.key`.
    pub fn translate(&self, key: &str, args: &[&dyn Display]) -> Result<String> {
        self.i18n.translate(&self.key(key), args)
    }

    /// Translate `name.key`, `None` when missing.
    pub fn translate_or_none(&self, key: &str, args: &[&dyn Display]) -> Result<Option<String>> {
        self.i18n.translate_or_none(&self.key(key), args)
    }
}
