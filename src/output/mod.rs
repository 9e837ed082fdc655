//! Output formatting for the CLI.
//!
//! Supports multiple output formats:
//! - `table` - Human-readable table (default)
//! - `json` - Structured JSON
//! - `yaml` - YAML format
//! - `text` - Plain values; `dump` writes the `key = value` locale format

mod table;

use std::io::{self, Write};

use serde::Serialize;
pub use table::TableFormatter;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Plain text.
    Text,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Unknown output format '{s}'. Use: table, json, yaml, text"
            ))),
        }
    }

    /// Whether this format is meant for people rather than programs.
    pub const fn is_human(self) -> bool {
        matches!(self, Self::Table | Self::Text)
    }
}

/// Trait for types that can be displayed in the CLI.
pub trait Displayable {
    /// Display as a table row.
    fn table_row(&self) -> Vec<String>;

    /// Get column headers for table display.
    fn table_headers() -> Vec<&'static str>;
}

/// Output writer that handles format selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    /// Create a new output writer.
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Create an output writer from a CLI option.
    pub fn from_cli(format: &str) -> Result<Self> {
        OutputFormat::parse(format).map(Self::new)
    }

    /// Output a single serializable value.
    pub fn value<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Yaml => Self::yaml(value),
            // Single values have no table layout; fall back to JSON.
            OutputFormat::Json | OutputFormat::Table | OutputFormat::Text => Self::json(value),
        }
    }

    /// Output a list of items as a table.
    pub fn table<T: Displayable + Serialize>(&self, items: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table | OutputFormat::Text => {
                let mut formatter = TableFormatter::new();
                formatter.headers(T::table_headers());
                for item in items {
                    formatter.row(item.table_row());
                }
                formatter.print();
                Ok(())
            },
            OutputFormat::Json => Self::json(items),
            OutputFormat::Yaml => Self::yaml(items),
        }
    }

    /// Output a single item with table format.
    pub fn item<T: Displayable + Serialize>(&self, item: &T) -> Result<()> {
        if self.format.is_human() {
            self.table(std::slice::from_ref(item))
        } else {
            self.value(item)
        }
    }

    fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        println!("{json}");
        Ok(())
    }

    fn yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        let yaml = serde_yaml::to_string(value)?;
        print!("{yaml}");
        Ok(())
    }

    /// Print a note to stderr, for human formats only.
    pub fn info(&self, message: &str) {
        if self.format.is_human() {
            eprintln!("{message}");
        }
    }

    /// Print raw text to stdout.
    pub fn raw(&self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    /// Print a line to stdout.
    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Get the current output format.
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}
