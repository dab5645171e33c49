//! Lookup of locale formatters by name.

use crate::error::{Result, TimeError};
use crate::formatter::{BritishFormatter, TimeFormatter};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Registry of formatters keyed by locale name.
///
/// Keys are matched case-insensitively and ignore surrounding whitespace.
/// A missing or blank key resolves to the default locale.
#[derive(Clone)]
pub struct FormatterRegistry {
    default_locale: String,
    formatters: BTreeMap<String, Arc<dyn TimeFormatter>>,
}

impl FormatterRegistry {
    /// Create a registry holding only the British formatter.
    pub fn new() -> Self {
        let mut registry = Self {
            default_locale: BritishFormatter::LOCALE.to_string(),
            formatters: BTreeMap::new(),
        };
        registry.register(BritishFormatter::new());
        registry
    }

    /// Add (or replace) a formatter under its own locale key.
    pub fn register<F>(&mut self, formatter: F) -> &mut Self
    where
        F: TimeFormatter + 'static,
    {
        let key = normalize(formatter.locale());
        tracing::debug!(locale = %key, "Registering formatter");
        self.formatters.insert(key, Arc::new(formatter));
        self
    }

    /// Change the locale used when no key is given.
    pub fn set_default(&mut self, locale: &str) -> Result<()> {
        let key = normalize(locale);
        if !self.formatters.contains_key(&key) {
            return Err(TimeError::UnknownFormatter(locale.to_string()));
        }
        self.default_locale = key;
        Ok(())
    }

    /// Resolve a formatter by key.
    pub fn get(&self, key: Option<&str>) -> Result<Arc<dyn TimeFormatter>> {
        let lookup = match key.map(str::trim) {
            None | Some("") => self.default_locale.clone(),
            Some(k) => normalize(k),
        };

        self.formatters
            .get(&lookup)
            .cloned()
            .ok_or_else(|| TimeError::UnknownFormatter(key.unwrap_or_default().to_string()))
    }

    /// The formatter used when no key is given.
    pub fn default_formatter(&self) -> Result<Arc<dyn TimeFormatter>> {
        self.get(None)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Registered locale keys, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.formatters.contains_key(&normalize(locale))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("default_locale", &self.default_locale)
            .field("locales", &self.locales())
            .finish()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
