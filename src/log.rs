//! Internal log sink.
//!
//! Every line goes to `tracing` and, when configured, to a caller-supplied
//! callback with a fixed component tag in front.

use std::fmt;
use std::sync::Arc;

/// Caller-supplied logging callback.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// Prefix for every line handed to a [`Logger`].
pub const LOG_TAG: &str = "[locale-kit]";

#[derive(Clone, Default)]
pub(crate) struct Log {
    callback: Option<Logger>,
}

impl Log {
    pub(crate) fn new(callback: Option<Logger>) -> Self {
        Self { callback }
    }

    pub(crate) fn emit(&self, message: impl fmt::Display) {
        let message = message.to_string();
        tracing::debug!(target: "locale_kit", "{message}");
        if let Some(callback) = &self.callback {
            callback(&format!("{LOG_TAG} {message}"));
        }
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log").field("callback", &self.callback.is_some()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_emit_prefixes_tag() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let log = Log::new(Some(Arc::new(move |line: &str| {
            sink.lock().unwrap().push(line.to_string());
        })));

        log.emit("loaded es");
        assert_eq!(*lines.lock().unwrap(), vec!["[locale-kit] loaded es".to_string()]);
    }

    #[test]
    fn test_emit_without_callback_is_noop() {
        Log::default().emit("nothing to see");
    }
}
