use std::fmt::Write;

use serde::Deserialize;

use super::table::{KanaTable, Syllabary};

#[derive(Deserialize)]
struct TableFile {
    hiragana: Option<TableSection>,
    katakana: Option<TableSection>,
}

#[derive(Deserialize)]
struct TableSection {
    mappings: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [hiragana] or [katakana] table found")]
    MissingTables,
    #[error("mappings table is empty")]
    Empty,
    #[error("invalid romaji key {0:?}: expected 1-4 lowercase ASCII characters")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("'{earlier}' is listed before '{later}' and would consume it; move longer tokens first")]
    Shadowed { earlier: String, later: String },
    #[error("transliteration tables already initialized")]
    AlreadyInitialized,
}

/// Tables read from a custom TOML file. A missing section means the
/// built-in table stays in effect for that syllabary.
#[derive(Debug, Clone)]
pub struct CustomTables {
    pub hiragana: Option<KanaTable>,
    pub katakana: Option<KanaTable>,
}

impl CustomTables {
    pub fn get(&self, syllabary: Syllabary) -> Option<&KanaTable> {
        match syllabary {
            Syllabary::Hiragana => self.hiragana.as_ref(),
            Syllabary::Katakana => self.katakana.as_ref(),
        }
    }

    pub fn mapping_count(&self) -> usize {
        Syllabary::ALL
            .iter()
            .filter_map(|&s| self.get(s))
            .map(KanaTable::len)
            .sum()
    }
}

/// Parse TOML text into ordered, validated tables.
pub fn parse_table_toml(toml_str: &str) -> Result<CustomTables, TableConfigError> {
    let file: TableFile =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if file.hiragana.is_none() && file.katakana.is_none() {
        return Err(TableConfigError::MissingTables);
    }

    Ok(CustomTables {
        hiragana: file.hiragana.map(|s| KanaTable::new(s.mappings)).transpose()?,
        katakana: file.katakana.map(|s| KanaTable::new(s.mappings)).transpose()?,
    })
}

/// Render the built-in tables in the custom table format.
pub fn default_toml() -> String {
    let mut out = String::from(
        "# Romaji to kana tables. Entries are applied top to bottom,\n\
         # so longer tokens must come before any token they contain.\n",
    );
    for syllabary in Syllabary::ALL {
        render_section(&mut out, syllabary, &KanaTable::builtin(syllabary));
    }
    out
}

fn render_section(out: &mut String, syllabary: Syllabary, table: &KanaTable) {
    let _ = write!(out, "\n[{syllabary}]\nmappings = [\n");
    for (romaji, kana) in table.iter() {
        let _ = writeln!(
            out,
            "    [{}, {}],",
            toml::Value::from(romaji),
            toml::Value::from(kana)
        );
    }
    out.push_str("]\n");
}
