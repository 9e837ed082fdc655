//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// locale-kit - inspect locale folders and translate keys
#[derive(Parser, Debug)]
#[command(name = "locale-kit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Folder holding `<locale><ext>` translation files
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Host culture to resolve against (e.g. es-ES); detected from the environment by default
    #[arg(long, global = true)]
    pub culture: Option<String>,

    /// Locale used when the culture matches nothing
    #[arg(long, global = true)]
    pub fallback: Option<String>,

    /// Wrapper placed around keys without a translation
    #[arg(long, global = true)]
    pub symbol: Option<String>,

    /// Fail on missing keys instead of wrapping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, global = true, value_parser = ["table", "json", "yaml", "text"])]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered locales with their display names
    Locales,

    /// Show which locale would be activated and why
    Resolve {
        /// Locale to request explicitly
        #[arg(long, short)]
        locale: Option<String>,
    },

    /// Translate a single key
    Get {
        /// Translation key (e.g. Mailbox.Notification)
        key: String,

        /// Positional arguments for {0}, {1}, ... placeholders
        args: Vec<String>,

        /// Locale to translate into
        #[arg(long, short)]
        locale: Option<String>,

        /// Print nothing for a missing key instead of the wrapped key
        #[arg(long)]
        or_none: bool,
    },

    /// Print every entry of a locale
    Dump {
        /// Locale to dump
        #[arg(long, short)]
        locale: Option<String>,

        /// Only keys under this section (`<section>.*`)
        #[arg(long, short)]
        section: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}
