//! Locale switching and translation lookup.
//!
//! [`I18n`] is an ordinary value owned by the application. For programs that
//! want a single process-wide instance, this module also offers a slot that
//! the composition root fills once and the [`t!`](crate::t) macro reads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use locale_kit::{i18n, t, I18n, Settings};
//!
//! // At startup
//! let mut instance = I18n::new(Settings::builder().fallback_locale("en").build());
//! instance.init()?;
//! i18n::install(instance);
//!
//! // Anywhere
//! let msg = t!("Mailbox.Title");
//! let msg = t!("Mailbox.Notification", "Ana", 3);
//!
//! // At shutdown
//! i18n::dispose();
//! ```

mod facade;
mod language;
mod observer;
mod section;

pub use facade::I18n;
pub use language::{Language, capitalize_first, native_display_name};
pub use observer::{Property, Subscription};
pub use section::Section;

use std::fmt::Display;
use std::sync::{PoisonError, RwLock};

/// Process-wide instance, filled by the composition root.
static CURRENT: RwLock<Option<I18n>> = RwLock::new(None);

/// Install `i18n` as the process-wide instance, returning the previous one.
pub fn install(i18n: I18n) -> Option<I18n> {
    CURRENT.write().unwrap_or_else(PoisonError::into_inner).replace(i18n)
}

/// Whether a process-wide instance is installed.
pub fn is_installed() -> bool {
    CURRENT.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Run `f` against the installed instance.
pub fn with_current<R>(f: impl FnOnce(&I18n) -> R) -> Option<R> {
    CURRENT.read().unwrap_or_else(PoisonError::into_inner).as_ref().map(f)
}

/// Run `f` against the installed instance with mutable access (locale switches).
///
/// Change notifications raised inside `f` are delivered once the slot is
/// unlocked again, so subscribers may call `t!()`.
pub fn with_current_mut<R>(f: impl FnOnce(&mut I18n) -> R) -> Option<R> {
    let (result, observers, changed) = {
        let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
        let i18n = slot.as_mut()?;
        i18n.defer_notifications();
        let result = f(i18n);
        let (observers, changed) = i18n.take_deferred();
        (result, observers, changed)
    };
    for property in changed {
        observers.notify(property);
    }
    Some(result)
}

/// Dispose and remove the installed instance.
///
/// Returns `false` if nothing was installed.
pub fn dispose() -> bool {
    let taken = CURRENT.write().unwrap_or_else(PoisonError::into_inner).take();
    match taken {
        Some(mut i18n) => {
            i18n.dispose();
            true
        },
        None => false,
    }
}

/// Translate through the installed instance.
///
/// Prefer the `t!()` macro. Errors are logged and the key itself is
/// returned, so call sites never fail.
pub fn translate(key: &str, args: &[&dyn Display]) -> String {
    match with_current(|i18n| i18n.translate(key, args)) {
        Some(Ok(text)) => text,
        Some(Err(e)) => {
            tracing::warn!(key = key, error = %e, "Translation failed");
            key.to_string()
        },
        None => {
            tracing::warn!(key = key, "No I18n instance installed");
            key.to_string()
        },
    }
}

/// Translation macro over the installed instance.
///
/// # Examples
///
/// ```rust,ignore
/// // Simple translation
/// let msg = t!("Mailbox.Title");
///
/// // Positional arguments fill {0}, {1}, ...
/// let msg = t!("Mailbox.Notification", "Ana", 3);
/// ```
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::translate($key, &[])
    };
    ($key:expr, $($arg:expr),+ $(,)?) => {{
        let args: &[&dyn ::std::fmt::Display] = &[$(&$arg),+];
        $crate::i18n::translate($key, args)
    }};
}
