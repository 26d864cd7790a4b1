//! Drill entries gathered from a folder of plain text files.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rtk_core::settings::SplitMode;
use tracing::{debug, debug_span};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone)]
pub struct DeckOptions {
    pub mode: SplitMode,
    /// File extension to collect, without the leading dot.
    pub extension: String,
}

/// Unique romaji entries in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    entries: Vec<String>,
    source_count: usize,
}

impl Deck {
    pub fn load(dir: &Path, options: &DeckOptions) -> Result<Self, DeckError> {
        let _span = debug_span!("load_deck", dir = %dir.display()).entered();
        let sources = collect_sources(dir, &options.extension)?;

        let mut deck = Deck {
            entries: Vec::new(),
            source_count: sources.len(),
        };
        let mut seen = HashSet::new();
        for path in &sources {
            let text = fs::read_to_string(path).map_err(|source| DeckError::Read {
                path: path.clone(),
                source,
            })?;
            for entry in extract_entries(&text, options.mode) {
                if seen.insert(entry.clone()) {
                    deck.entries.push(entry);
                }
            }
        }

        debug!(
            source_count = deck.source_count,
            entry_count = deck.entries.len()
        );
        Ok(deck)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Number of files the entries were read from.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recursively collect files under `dir` ending in `.{extension}`, sorted by path.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DeckError> {
    if !dir.exists() {
        return Err(DeckError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(DeckError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Split `text` into trimmed, non-empty entries.
pub fn extract_entries(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Words => text.split_whitespace().map(str::to_string).collect(),
        SplitMode::Lines => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn options(mode: SplitMode) -> DeckOptions {
        DeckOptions {
            mode,
            extension: "txt".to_string(),
        }
    }

    #[test]
    fn test_extract_words() {
        let entries = extract_entries("  sushi\tsake\n\nramen  ", SplitMode::Words);
        assert_eq!(entries, vec!["sushi", "sake", "ramen"]);
    }

    #[test]
    fn test_extract_lines() {
        let entries = extract_entries("ohayou gozaimasu\n   \n  konbanwa \r\n", SplitMode::Lines);
        assert_eq!(entries, vec!["ohayou gozaimasu", "konbanwa"]);
    }

    #[test]
    fn test_collect_sources_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.txt", "");
        write(dir.path(), "a/nested.txt", "");
        write(dir.path(), "a/skip.md", "");
        write(dir.path(), "UPPER.TXT", "");

        let paths = collect_sources(dir.path(), "txt").unwrap();
        let names: Vec<PathBuf> = paths
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("UPPER.TXT"),
                PathBuf::from("a/nested.txt"),
                PathBuf::from("b.txt"),
            ]
        );
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Deck::load(&missing, &options(SplitMode::Words)).unwrap_err();
        assert!(matches!(err, DeckError::NotFound(_)));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "words.txt", "sushi");
        let err = Deck::load(&dir.path().join("words.txt"), &options(SplitMode::Words)).unwrap_err();
        assert!(matches!(err, DeckError::NotADirectory(_)));
    }

    #[test]
    fn test_load_deduplicates_in_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "1.txt", "sushi sake\nsushi");
        write(dir.path(), "2.txt", "ramen sake");

        let deck = Deck::load(dir.path(), &options(SplitMode::Words)).unwrap();
        assert_eq!(deck.entries(), ["sushi", "sake", "ramen"]);
        assert_eq!(deck.source_count(), 2);
    }

    #[test]
    fn test_load_lines() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "phrases.txt", "ohayou gozaimasu\narigatou\nohayou gozaimasu\n");

        let deck = Deck::load(dir.path(), &options(SplitMode::Lines)).unwrap();
        assert_eq!(deck.into_entries(), vec!["ohayou gozaimasu", "arigatou"]);
    }

    #[test]
    fn test_empty_directory_is_empty_deck() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Deck::load(dir.path(), &options(SplitMode::Words)).unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.source_count(), 0);
    }
}
