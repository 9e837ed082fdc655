//! locale-kit
//!
//! Locale resolution and key-based translation lookup. Translation files are
//! discovered through a [`LocaleProvider`], parsed by a [`LocaleReader`]
//! chosen by file extension, and served by [`I18n`], which picks the active
//! locale from the host culture and notifies subscribers when it changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use locale_kit::{I18n, Settings};
//!
//! // Serves ./Locales/<locale>.txt
//! let mut i18n = I18n::new(Settings::builder().fallback_locale("en").build());
//! i18n.init()?;
//!
//! let _greeting = i18n.translate("Mailbox.Notification", &[&"Ana", &3])?;
//! i18n.set_locale("es")?;
//! # Ok::<(), locale_kit::Error>(())
//! ```
//!
//! The crate also ships the `locale-kit` binary for inspecting locale
//! folders from the command line:
//!
//! ```bash
//! locale-kit --dir Locales locales
//! locale-kit --culture es-ES get Mailbox.Notification Ana 3
//! locale-kit dump --locale en --section Mailbox -o text
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod culture;
pub mod enums;
pub mod error;
pub mod format;
pub mod i18n;
pub mod log;
pub mod output;
pub mod provider;
pub mod reader;
pub mod resolver;
pub mod store;

pub use cli::Cli;
pub use config::Settings;
pub use culture::Culture;
pub use enums::TranslatableEnum;
pub use error::{Error, Result};
pub use format::{FormatError, format_positional};
pub use i18n::{I18n, Language, Property, Section, Subscription};
pub use log::Logger;
pub use provider::{DirectoryProvider, EmbeddedProvider, LocaleProvider, LocaleSource};
pub use reader::{
    FluentReader, JsonReader, LocaleReader, ReaderRegistry, TextReader, YamlReader,
};
pub use resolver::{Resolution, Strategy, resolve};
pub use store::{NotFoundPolicy, TranslationMap};

/// CLI version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Print clap error (includes help/version)
            e.print().ok();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        },
    };

    if cli_args.debug {
        init_logging();
    }

    let config = config::Config::load()?;
    let ctx = context::Context::new(config, &cli_args)?;

    commands::execute(&ctx, &cli_args.command)
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locale_kit=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
