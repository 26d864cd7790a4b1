//! Drill settings loaded from TOML, following the same OnceLock pattern as
//! the transliteration tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::romaji::{Strategy, Syllabary};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: &str) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineSettings,
    pub deck: DeckSettings,
    pub quiz: QuizSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    pub mode: SplitMode,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSettings {
    pub syllabary: SyllabaryChoice,
    pub shuffle: bool,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// How a source file is cut into drill entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    Words,
    Lines,
}

/// Which syllabary a card is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllabaryChoice {
    Hiragana,
    Katakana,
    /// Drawn independently for each card.
    Random,
}

impl SyllabaryChoice {
    pub fn fixed(self) -> Option<Syllabary> {
        match self {
            SyllabaryChoice::Hiragana => Some(Syllabary::Hiragana),
            SyllabaryChoice::Katakana => Some(Syllabary::Katakana),
            SyllabaryChoice::Random => None,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.deck.extension = s.deck.extension.trim().to_string();
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let ext = &s.deck.extension;
    if ext.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "deck.extension".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if ext.starts_with('.') || ext.contains(['/', '\\']) {
        return Err(SettingsError::InvalidValue {
            field: "deck.extension".to_string(),
            reason: "must be a bare extension like \"txt\"".to_string(),
        });
    }
    if s.quiz.limit == Some(0) {
        return Err(SettingsError::InvalidValue {
            field: "quiz.limit".to_string(),
            reason: "must be positive (omit it for no limit)".to_string(),
        });
    }
    Ok(())
}
