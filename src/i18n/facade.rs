//! The `I18n` entry point: locale switching, lookups and notifications.

use std::fmt::{self, Display};
use std::sync::Arc;

use super::{Language, Property, Section, Subscription, observer::Observers};
use crate::config::Settings;
use crate::culture::Culture;
use crate::enums::{TranslatableEnum, variant_key};
use crate::error::{Error, Result};
use crate::log::Log;
use crate::provider::{DirectoryProvider, LocaleProvider, LocaleSource};
use crate::reader::{LocaleReader, ReaderRegistry};
use crate::resolver::{self, Resolution, Strategy};
use crate::store::{NotFoundPolicy, TranslationMap, TranslationStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unloaded,
    Loaded,
    Disposed,
}

/// Locale resolution and translation lookup.
///
/// Owned by the caller and passed by reference; see [`crate::i18n`] for an
/// optional process-wide slot.
///
/// ```
/// use locale_kit::{Culture, EmbeddedProvider, I18n, Settings};
///
/// let mut i18n = I18n::new(Settings::builder().culture(Culture::parse("es-ES")).build());
/// i18n.set_provider(
///     EmbeddedProvider::new()
///         .with_locale("en", ".txt", "hello = Hello {0}")
///         .with_locale("es", ".txt", "hello = Hola {0}"),
/// )?;
/// i18n.init()?;
///
/// assert_eq!(i18n.locale(), Some("es"));
/// assert_eq!(i18n.translate("hello", &[&"Ana"])?, "Hola Ana");
/// assert_eq!(i18n.translate("missing", &[])?, "?missing?");
/// # Ok::<(), locale_kit::Error>(())
/// ```
pub struct I18n {
    settings: Settings,
    policy: NotFoundPolicy,
    culture: Culture,
    log: Log,
    readers: ReaderRegistry,
    provider: Option<Box<dyn LocaleProvider>>,
    locales: Vec<LocaleSource>,
    store: TranslationStore,
    observers: Observers,
    deferred: Option<Vec<Property>>,
    state: State,
}

impl I18n {
    /// Create an unloaded instance. Nothing is read until [`init`](Self::init).
    pub fn new(settings: Settings) -> Self {
        let policy = NotFoundPolicy {
            symbol: settings.not_found_symbol.clone(),
            throw: settings.throw_when_key_not_found,
        };
        let culture = settings.culture.clone().unwrap_or_else(Culture::detect);
        let log = Log::new(settings.logger.clone());

        Self {
            settings,
            policy,
            culture,
            log,
            readers: ReaderRegistry::new(),
            provider: None,
            locales: Vec::new(),
            store: TranslationStore::new(),
            observers: Observers::default(),
            deferred: None,
            state: State::Unloaded,
        }
    }

    /// Bind a reader to a file extension.
    pub fn add_reader(
        &mut self,
        reader: Arc<dyn LocaleReader>,
        extension: &str,
    ) -> Result<&mut Self> {
        self.ensure_not_disposed()?;
        let name = reader.name().to_string();
        self.readers.register(reader, extension)?;
        self.log.emit(format_args!("registered reader '{name}' for '{extension}'"));
        Ok(self)
    }

    /// Replace the locale provider. Must be called before the first load.
    ///
    /// Only one provider is active at a time; without one, `init` serves the
    /// configured locales folder.
    pub fn set_provider(&mut self, provider: impl LocaleProvider + 'static) -> Result<&mut Self> {
        self.ensure_not_disposed()?;
        if self.state == State::Loaded {
            return Err(Error::config("the provider must be set before a locale is loaded"));
        }
        if let Some(mut previous) = self.provider.replace(Box::new(provider)) {
            previous.dispose();
        }
        Ok(self)
    }

    /// Discover locales and load the one the resolver picks.
    ///
    /// Calling it again once loaded only logs.
    pub fn init(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        if self.state == State::Loaded {
            self.log.emit("already initialized");
            return Ok(());
        }

        self.discover()?;
        let resolution = self.resolve(None)?;
        self.load(&resolution.locale)?;
        self.notify_changed();
        Ok(())
    }

    /// Switch to `locale`.
    ///
    /// Fails with `LocaleNotAvailable` for an unknown id, leaving the active
    /// locale loaded. Switching to the active locale only logs.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.ensure_not_disposed()?;
        if locale.trim().is_empty() {
            return Err(Error::invalid_arg("locale must not be empty"));
        }
        if self.state == State::Unloaded {
            self.discover()?;
        }

        let resolution = self.resolve(Some(locale))?;
        if self.store.locale() == Some(resolution.locale.as_str()) {
            self.log.emit(format_args!("locale '{}' is already active", resolution.locale));
            return Ok(());
        }

        self.load(&resolution.locale)?;
        self.notify_changed();
        Ok(())
    }

    /// Switch to `language`; same rules as [`set_locale`](Self::set_locale).
    pub fn set_language(&mut self, language: &Language) -> Result<()> {
        self.set_locale(&language.locale)
    }

    /// Pick a locale without loading it.
    ///
    /// Logs when the fallback or first-available rule decides.
    pub fn resolve(&self, requested: Option<&str>) -> Result<Resolution> {
        let available = self.available_locales();
        let resolution = resolver::resolve(
            &available,
            &self.culture,
            requested,
            self.settings.fallback_locale.as_deref(),
        )?;

        match resolution.strategy {
            Strategy::Fallback => self.log.emit(format_args!(
                "culture '{}' not available, using fallback locale '{}'",
                self.culture, resolution.locale
            )),
            Strategy::FirstAvailable => self.log.emit(format_args!(
                "culture '{}' not available and no usable fallback, using first locale '{}'",
                self.culture, resolution.locale
            )),
            Strategy::Requested | Strategy::CultureExact | Strategy::CultureLanguage => {},
        }
        Ok(resolution)
    }

    /// Active locale id.
    pub fn locale(&self) -> Option<&str> {
        self.store.locale()
    }

    /// Active language.
    pub fn language(&self) -> Option<Language> {
        self.locale().map(|locale| self.describe(locale))
    }

    /// Every discovered language, in provider order.
    pub fn languages(&self) -> Vec<Language> {
        self.locales.iter().map(|source| self.describe(&source.locale)).collect()
    }

    /// Discovered locale ids, in provider order.
    pub fn available_locales(&self) -> Vec<String> {
        self.locales.iter().map(|source| source.locale.clone()).collect()
    }

    /// Discovered locales with their extensions.
    pub fn sources(&self) -> &[LocaleSource] {
        &self.locales
    }

    /// Host culture used for resolution.
    pub const fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Settings this instance was built with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registered readers.
    pub const fn readers(&self) -> &ReaderRegistry {
        &self.readers
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.state == State::Disposed
    }

    /// Translate `key`, formatting `args` into `{0}`-style placeholders.
    ///
    /// A missing key yields `symbol + key + symbol`, or `KeyNotFound` when
    /// throw-on-missing-key is enabled.
    pub fn translate(&self, key: &str, args: &[&dyn Display]) -> Result<String> {
        self.ensure_loaded()?;
        self.store.lookup(key, args, &self.policy)
    }

    /// Translate `key`, returning `None` when it is missing regardless of policy.
    pub fn translate_or_none(&self, key: &str, args: &[&dyn Display]) -> Result<Option<String>> {
        self.ensure_loaded()?;
        self.store.lookup_or_none(key, args)
    }

    /// Translate one enumeration value as `prefix.Variant`.
    pub fn translate_variant<E: TranslatableEnum>(
        &self,
        value: E,
        section: Option<&str>,
    ) -> Result<String> {
        self.translate(&variant_key::<E>(section, value.variant_name()), &[])
    }

    /// Translate every variant of `E`, in declaration order.
    pub fn translate_enum_to_list<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
    ) -> Result<Vec<String>> {
        self.ensure_loaded()?;
        self.store.to_list::<E>(section, &self.policy)
    }

    /// Translate every variant of `E` into a map.
    pub fn translate_enum_to_map<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
    ) -> Result<std::collections::HashMap<E, String>> {
        self.ensure_loaded()?;
        self.store.to_map::<E>(section, &self.policy)
    }

    /// Translate every variant of `E` into `(variant, text)` pairs.
    pub fn translate_enum_to_paired_list<E: TranslatableEnum>(
        &self,
        section: Option<&str>,
    ) -> Result<Vec<(E, String)>> {
        self.ensure_loaded()?;
        self.store.to_paired_list::<E>(section, &self.policy)
    }

    /// A view that prefixes every key with `name.`.
    pub fn section<'a>(&'a self, name: &'a str) -> Result<Section<'a>> {
        if name.trim().is_empty() {
            return Err(Error::invalid_arg("section name must not be empty"));
        }
        Ok(Section::new(self, name))
    }

    /// Shared handle to the active translations.
    pub fn translations(&self) -> Result<Arc<TranslationMap>> {
        self.ensure_loaded()?;
        Ok(self.store.entries())
    }

    /// Register a callback for [`Property`] changes.
    ///
    /// Callbacks run after the change is complete. When the instance lives in
    /// the process-wide slot they run after the slot is unlocked, so a
    /// callback may read translations back through `t!()`.
    pub fn subscribe(&self, callback: impl Fn(Property) + Send + Sync + 'static) -> Subscription {
        self.observers.subscribe(callback)
    }

    /// Release the provider and clear all state.
    ///
    /// The instance cannot be initialized again afterwards.
    pub fn dispose(&mut self) {
        if self.state == State::Disposed {
            return;
        }
        if let Some(mut provider) = self.provider.take() {
            provider.dispose();
        }
        self.store.clear();
        self.locales.clear();
        self.readers.clear();
        self.observers.clear();
        self.state = State::Disposed;
        self.log.emit("disposed");
        self.log = Log::default();
    }

    fn discover(&mut self) -> Result<()> {
        if self.readers.ensure_default() {
            self.log.emit("registered default text reader for '.txt'");
        }

        let folder = self.settings.locales_folder.clone();
        let provider = self
            .provider
            .get_or_insert_with(|| Box::new(DirectoryProvider::new(folder)) as Box<dyn LocaleProvider>);
        provider.init()?;
        let discovered = provider.discover()?;
        let description = provider.describe();

        let mut locales: Vec<LocaleSource> = Vec::with_capacity(discovered.len());
        for source in discovered {
            if self.readers.get(&source.extension).is_none() {
                self.log.emit(format_args!(
                    "skipping locale '{}': no reader for '{}'",
                    source.locale, source.extension
                ));
                continue;
            }
            if locales.iter().any(|known| known.locale == source.locale) {
                return Err(Error::config(format!(
                    "locale '{}' is provided more than once by {description}",
                    source.locale
                )));
            }
            locales.push(source);
        }

        if locales.is_empty() {
            return Err(Error::NoLocalesAvailable(description));
        }

        self.log.emit(format_args!(
            "discovered {} locale(s) in {description}: {}",
            locales.len(),
            locales.iter().map(|s| s.locale.as_str()).collect::<Vec<_>>().join(", ")
        ));
        self.locales = locales;
        Ok(())
    }

    /// Parse `locale` off to the side, then swap it in.
    fn load(&mut self, locale: &str) -> Result<()> {
        let source = self
            .locales
            .iter()
            .find(|source| source.locale == locale)
            .cloned()
            .ok_or_else(|| Error::locale_not_available(locale, &self.available_locales()))?;
        let reader = self.readers.get(&source.extension).cloned().ok_or_else(|| {
            Error::config(format!("no reader registered for '{}'", source.extension))
        })?;
        let provider = self.provider.as_deref().ok_or(Error::NotInitialized)?;

        let entries = {
            let mut stream = provider.open(&source)?;
            TranslationStore::load(reader.as_ref(), &mut *stream, locale, &source.extension)?
        };

        self.log.emit(format_args!(
            "loaded locale '{locale}' ({} keys) with reader '{}'",
            entries.len(),
            reader.name()
        ));
        self.store.swap(locale, entries);
        self.state = State::Loaded;
        Ok(())
    }

    fn notify_changed(&mut self) {
        let changed = [Property::Locale, Property::Language, Property::Items];
        match &mut self.deferred {
            Some(queue) => queue.extend(changed),
            None => changed.into_iter().for_each(|property| self.observers.notify(property)),
        }
    }

    /// Queue change notifications instead of running callbacks.
    pub(super) fn defer_notifications(&mut self) {
        self.deferred.get_or_insert_with(Vec::new);
    }

    /// Stop queueing and hand back the queue with the observers to run it on.
    pub(super) fn take_deferred(&mut self) -> (Observers, Vec<Property>) {
        (self.observers.clone(), self.deferred.take().unwrap_or_default())
    }

    fn describe(&self, locale: &str) -> Language {
        Language::describe(locale, self.store.get(locale).map(str::to_string))
    }

    fn ensure_not_disposed(&self) -> Result<()> {
        if self.state == State::Disposed { Err(Error::Disposed) } else { Ok(()) }
    }

    fn ensure_loaded(&self) -> Result<()> {
        match self.state {
            State::Loaded => Ok(()),
            State::Unloaded => Err(Error::NotInitialized),
            State::Disposed => Err(Error::Disposed),
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale())
            .field("available", &self.available_locales())
            .field("culture", &self.culture.name)
            .field("state", &self.state)
            .finish()
    }
}
