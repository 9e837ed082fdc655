//! Error types for locale-kit.
//!
//! Configuration and discovery errors are fatal and surface from `init` or
//! registration calls. Missing keys are policy-controlled and only become
//! errors when throw-on-missing-key is enabled.

use std::io;
use thiserror::Error;

use crate::format::FormatError;

/// Boxed error returned by a [`LocaleReader`](crate::reader::LocaleReader).
pub type ReaderError = Box<dyn std::error::Error + Send + Sync>;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration (bad reader registration, missing folder, etc.).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider discovered no usable locales.
    #[error("No locales available in {0}")]
    NoLocalesAvailable(String),

    /// An explicitly requested locale is not among the discovered ones.
    #[error("Locale '{locale}' is not available. Available locales: {available}")]
    LocaleNotAvailable {
        /// Requested locale id.
        locale: String,
        /// Comma-separated list of discovered locale ids.
        available: String,
    },

    /// A reader failed to parse locale content.
    #[error("Reader '{reader}' failed to parse locale '{locale}' ({extension}): {source}")]
    ReaderFailure {
        /// Name of the reader that failed.
        reader: String,
        /// Locale being loaded.
        locale: String,
        /// Extension the reader is bound to.
        extension: String,
        /// Underlying parse error.
        #[source]
        source: ReaderError,
    },

    /// Key missing from the active locale while throw-on-missing-key is on.
    #[error("Key '{key}' not found for locale '{locale}'")]
    KeyNotFound {
        /// Requested key.
        key: String,
        /// Active locale id.
        locale: String,
    },

    /// Empty or otherwise invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Placeholder/argument mismatch while formatting a translation.
    #[error("Cannot format '{key}': {source}")]
    Format {
        /// Key whose template failed to format.
        key: String,
        /// Formatting failure.
        #[source]
        source: FormatError,
    },

    /// Lookup attempted before any locale was loaded.
    #[error("No locale loaded. Call init() first.")]
    NotInitialized,

    /// The instance has been disposed and must not be reused.
    #[error("This I18n instance has been disposed; construct a new one")]
    Disposed,

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error type.
    ///
    /// - 1: General error
    /// - 2: Invalid configuration or arguments
    /// - 3: Locale not available
    /// - 4: No locales discovered
    /// - 5: Key not found
    /// - 6: Reader failure
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) | Self::Format { .. } => 2,
            Self::LocaleNotAvailable { .. } => 3,
            Self::NoLocalesAvailable(_) => 4,
            Self::KeyNotFound { .. } => 5,
            Self::ReaderFailure { .. } => 6,
            Self::NotInitialized
            | Self::Disposed
            | Self::Io(_)
            | Self::Json(_)
            | Self::Yaml(_)
            | Self::Other(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    pub(crate) fn locale_not_available(locale: &str, available: &[String]) -> Self {
        Self::LocaleNotAvailable { locale: locale.to_string(), available: available.join(", ") }
    }
}
