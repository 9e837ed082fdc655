//! Translation lookup commands.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::output::{Displayable, OutputFormat};
use crate::reader::text::write_entries;
use crate::store::TranslationMap;

#[derive(Debug, Clone, Serialize)]
struct Translation {
    key: String,
    locale: String,
    value: Option<String>,
}

/// Translate one key, formatting `args` into its placeholders.
pub fn get(
    ctx: &Context,
    key: &str,
    args: &[String],
    locale: Option<&str>,
    or_none: bool,
) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::invalid_arg("key must not be empty"));
    }

    let i18n = ctx.load(locale)?;
    let args: Vec<&dyn Display> = args.iter().map(|arg| arg as &dyn Display).collect();
    let value = if or_none {
        i18n.translate_or_none(key, &args)?
    } else {
        Some(i18n.translate(key, &args)?)
    };

    if ctx.output.format().is_human() {
        if let Some(value) = value {
            ctx.output.line(&value);
        }
        return Ok(());
    }

    ctx.output.value(&Translation {
        key: key.to_string(),
        locale: i18n.locale().unwrap_or_default().to_string(),
        value,
    })
}

#[derive(Debug, Clone, Serialize)]
struct EntryRow {
    key: String,
    value: String,
}

impl Displayable for EntryRow {
    fn table_row(&self) -> Vec<String> {
        vec![self.key.clone(), self.value.replace('\r', "").replace('\n', "\\n")]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["KEY", "VALUE"]
    }
}

/// Print every entry of a locale, optionally limited to one section.
pub fn dump(ctx: &Context, locale: Option<&str>, section: Option<&str>) -> Result<()> {
    let i18n = ctx.load(locale)?;
    let prefix = match section {
        Some(name) => Some(i18n.section(name)?.key("")),
        None => None,
    };

    let entries: BTreeMap<String, String> = i18n
        .translations()?
        .iter()
        .filter(|(key, _)| prefix.as_deref().is_none_or(|prefix| key.starts_with(prefix)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    match ctx.output.format() {
        OutputFormat::Text => {
            let map: TranslationMap = entries.into_iter().collect();
            ctx.output.raw(&write_entries(&map));
            Ok(())
        },
        OutputFormat::Table => {
            let rows: Vec<EntryRow> =
                entries.into_iter().map(|(key, value)| EntryRow { key, value }).collect();
            ctx.output.table(&rows)
        },
        OutputFormat::Json | OutputFormat::Yaml => ctx.output.value(&entries),
    }
}
