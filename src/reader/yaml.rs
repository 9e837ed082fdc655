//! YAML locale files, flattened like JSON.

use std::io::Read;

use super::LocaleReader;
use super::json::flatten_document;
use crate::error::ReaderError;
use crate::store::TranslationMap;

/// Reader for `.yaml` / `.yml` locale files.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReader;

impl LocaleReader for YamlReader {
    fn name(&self) -> &str {
        "yaml"
    }

    fn parse(&self, stream: &mut dyn Read) -> Result<Option<TranslationMap>, ReaderError> {
        let mut content = String::new();
        stream.read_to_string(&mut content)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let document: serde_yaml::Value = serde_yaml::from_str(&content)?;
        // Non-string mapping keys fail the conversion.
        let value = serde_json::to_value(document)?;
        flatten_document(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Option<TranslationMap>, ReaderError> {
        YamlReader.parse(&mut content.as_bytes())
    }

    #[test]
    fn test_nested_mapping() {
        let map = parse("Animals:\n  Dog: Perro\n  Cat: Gato\nenabled: true\n").unwrap().unwrap();
        assert_eq!(map["Animals.Dog"], "Perro");
        assert_eq!(map["Animals.Cat"], "Gato");
        assert_eq!(map["enabled"], "true");
    }

    #[test]
    fn test_block_scalar_keeps_lines() {
        let map = parse("poem: |\n  Line One\n  Line Two\n").unwrap().unwrap();
        assert_eq!(map["poem"], "Line One\nLine Two\n");
    }

    #[test]
    fn test_empty_document_is_empty() {
        assert!(parse("").unwrap().is_none());
    }

    #[test]
    fn test_sequence_root_fails() {
        assert!(parse("- a\n- b\n").is_err());
    }
}
