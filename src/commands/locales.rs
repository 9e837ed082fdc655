//! Locale discovery and resolution commands.

use serde::Serialize;

use crate::context::Context;
use crate::error::Result;
use crate::output::Displayable;
use crate::resolver::Strategy;

#[derive(Debug, Clone, Serialize)]
struct LocaleRow {
    locale: String,
    name: String,
    extension: String,
    active: bool,
}

impl Displayable for LocaleRow {
    fn table_row(&self) -> Vec<String> {
        let marker = if self.active { "*" } else { "" };
        vec![format!("{}{marker}", self.locale), self.name.clone(), self.extension.clone()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["LOCALE", "NAME", "FORMAT"]
    }
}

/// List discovered locales; the one the resolver picks is marked active.
pub fn locales(ctx: &Context) -> Result<()> {
    let i18n = ctx.load(None)?;
    let active = i18n.locale().unwrap_or_default();

    let rows: Vec<LocaleRow> = i18n
        .sources()
        .iter()
        .zip(i18n.languages())
        .map(|(source, language)| LocaleRow {
            active: source.locale == active,
            locale: source.locale.clone(),
            name: language.display_name,
            extension: source.extension.clone(),
        })
        .collect();

    ctx.output.table(&rows)?;
    ctx.output.info("");
    ctx.output.info("* = active locale");
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct ResolveReport {
    culture: String,
    requested: Option<String>,
    fallback: Option<String>,
    locale: String,
    strategy: Strategy,
}

impl Displayable for ResolveReport {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.culture.clone(),
            self.requested.clone().unwrap_or_else(|| "-".to_string()),
            self.fallback.clone().unwrap_or_else(|| "-".to_string()),
            self.locale.clone(),
            self.strategy.to_string(),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["CULTURE", "REQUESTED", "FALLBACK", "LOCALE", "RULE"]
    }
}

/// Show the locale the resolver picks and which rule decided.
pub fn resolve(ctx: &Context, requested: Option<&str>) -> Result<()> {
    let i18n = ctx.load(None)?;
    let resolution = i18n.resolve(requested)?;

    let report = ResolveReport {
        culture: i18n.culture().to_string(),
        requested: requested.map(str::to_string),
        fallback: ctx.settings.fallback_locale.clone(),
        locale: resolution.locale,
        strategy: resolution.strategy,
    };
    ctx.output.item(&report)
}
