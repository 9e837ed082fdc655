//! Execution context shared by every command.

use std::sync::Arc;

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::culture::Culture;
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::output::Output;
use crate::reader::{FluentReader, JsonReader, YamlReader};

/// Opt-in readers the CLI enables on top of the default text reader.
const CLI_READERS: &[&str] = &[".json", ".yaml", ".yml", ".ftl"];

/// CLI execution context.
///
/// Contains everything needed to execute CLI commands:
/// - Configuration after file and environment layers
/// - Engine settings with command-line overrides applied
/// - Output writer
#[derive(Debug)]
pub struct Context {
    /// CLI configuration.
    pub config: Config,

    /// Engine settings for the instances this context builds.
    pub settings: Settings,

    /// Output configuration.
    pub output: Output,

    /// Debug mode.
    pub debug: bool,
}

impl Context {
    /// Create a context from the loaded configuration and parsed flags.
    pub fn new(config: Config, cli: &Cli) -> Result<Self> {
        let mut settings = config.to_settings();

        if let Some(dir) = &cli.dir {
            settings.locales_folder.clone_from(dir);
        }
        if let Some(fallback) = &cli.fallback {
            settings.fallback_locale = Some(fallback.clone());
        }
        if let Some(symbol) = &cli.symbol {
            settings.not_found_symbol.clone_from(symbol);
        }
        if cli.strict {
            settings.throw_when_key_not_found = true;
        }
        if let Some(tag) = &cli.culture {
            let culture = Culture::try_parse(tag)
                .ok_or_else(|| Error::invalid_arg(format!("'{tag}' is not a valid culture tag")))?;
            settings.culture = Some(culture);
        }

        let format = cli.output.as_deref().unwrap_or(&config.output.format);
        let output = Output::from_cli(format)?;

        Ok(Self { config, settings, output, debug: cli.debug })
    }

    /// Build an unloaded engine with every CLI reader registered.
    pub fn engine(&self) -> Result<I18n> {
        let mut i18n = I18n::new(self.settings.clone());
        for &extension in CLI_READERS {
            let reader: Arc<dyn crate::reader::LocaleReader> = match extension {
                ".json" => Arc::new(JsonReader),
                ".ftl" => Arc::new(FluentReader),
                _ => Arc::new(YamlReader),
            };
            i18n.add_reader(reader, extension)?;
        }
        Ok(i18n)
    }

    /// Build an engine and load `locale`, or the resolved locale when `None`.
    pub fn load(&self, locale: Option<&str>) -> Result<I18n> {
        let mut i18n = self.engine()?;
        match locale {
            Some(locale) => i18n.set_locale(locale)?,
            None => i18n.init()?,
        }
        Ok(i18n)
    }
}
