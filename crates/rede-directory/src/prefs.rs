//! Theme and language preferences.
//!
//! Both are read once at startup and written back on every change. A
//! failing store never blocks the page: reads fall back to defaults and
//! writes are logged and dropped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::PreferenceError;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Key under which the language is stored.
pub const LANGUAGE_KEY: &str = "language";

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the `data-theme` attribute value, also the stored value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value; anything unknown is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: the theme it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Interface language indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    /// Two-letter code, also the stored value.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(value.trim()))
    }

    pub fn all() -> &'static [Language] {
        &[Language::Pt, Language::En, Language::Es]
    }

    /// Text shown after switching to this language.
    pub fn switched_message(&self) -> String {
        format!("Idioma alterado para: {}", self.code().to_uppercase())
    }
}

/// A string key-value store for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user config directory.
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rede-viewer")
            .join("preferences.json");
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// The current theme and language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Reads both preferences, falling back to defaults.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let theme = read(store, THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        let language = read(store, LANGUAGE_KEY)
            .and_then(|value| Language::parse(&value))
            .unwrap_or_default();
        tracing::debug!(theme = theme.css_value(), language = language.code(), "Loaded preferences");
        Self { theme, language }
    }

    /// Switches between light and dark and stores the result.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        write(store, THEME_KEY, self.theme.css_value());
        tracing::info!(theme = self.theme.css_value(), "Theme changed");
        self.theme
    }

    /// Switches the language, stores it and returns the notification text.
    pub fn set_language(&mut self, language: Language, store: &mut dyn PreferenceStore) -> String {
        self.language = language;
        write(store, LANGUAGE_KEY, language.code());
        tracing::info!(language = language.code(), "Language changed");
        language.switched_message()
    }
}

fn read(store: &dyn PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read preference, using default");
            None
        }
    }
}

fn write(store: &mut dyn PreferenceStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key, error = %e, "Failed to persist preference");
    }
}
