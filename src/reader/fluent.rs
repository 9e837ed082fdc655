//! Project Fluent (`.ftl`) locale files.
//!
//! Each message with a value becomes one entry, formatted without arguments.
//! Terms and attributes are not exported.

use std::io::Read;

use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use unic_langid::LanguageIdentifier;

use super::LocaleReader;
use crate::error::ReaderError;
use crate::store::TranslationMap;

/// Reader for `.ftl` locale files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentReader;

impl LocaleReader for FluentReader {
    fn name(&self) -> &str {
        "fluent"
    }

    fn parse(&self, stream: &mut dyn Read) -> Result<Option<TranslationMap>, ReaderError> {
        let mut source = String::new();
        stream.read_to_string(&mut source)?;

        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            let details: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();
            details.join("; ")
        })?;

        let mut bundle: FluentBundle<&FluentResource> =
            FluentBundle::new(vec![LanguageIdentifier::default()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(&resource)
            .map_err(|errors| format!("conflicting entries: {errors:?}"))?;

        let mut map = TranslationMap::new();
        for entry in resource.entries() {
            let ast::Entry::Message(message) = entry else {
                continue;
            };
            let id = message.id.name;
            let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) else {
                continue;
            };

            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() {
                tracing::warn!(key = id, errors = ?errors, "Fluent message formatted with errors");
            }
            map.insert(id.to_string(), value.into_owned());
        }

        Ok(Some(map))
    }
}
