use std::fs;

use rtk_core::romaji::{self, Transliterator};
use rtk_core::settings;

pub fn table_export() {
    print!("{}", romaji::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(romaji::parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} mappings (hiragana: {}, katakana: {})",
        tables.mapping_count(),
        describe(tables.hiragana.as_ref().map(|t| t.len())),
        describe(tables.katakana.as_ref().map(|t| t.len())),
    );
}

fn describe(len: Option<usize>) -> String {
    match len {
        Some(n) => n.to_string(),
        None => "built-in".to_string(),
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: engine.strategy={:?}, deck.mode={:?}, deck.extension={}, quiz.syllabary={:?}",
        s.engine.strategy, s.deck.mode, s.deck.extension, s.quiz.syllabary
    );
}

/// Install custom tables from `file` before any conversion runs.
pub fn load_tables(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        Transliterator::init_custom(&content),
        "Error loading tables from {file}: {}"
    );
}

/// Install custom settings from `file` before anything reads them.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        settings::init_custom(&content),
        "Error loading settings from {file}: {}"
    );
}
