use std::sync::OnceLock;

use serde::Deserialize;
use tracing::trace;

use super::config::{parse_table_toml, TableConfigError};
use super::table::{KanaTable, Syllabary, GEMINATE_CONSONANTS, LONG_VOWELS};
use super::trie::KanaTrie;

static INSTANCE: OnceLock<Transliterator> = OnceLock::new();

/// How the table is applied once the gemination and long-vowel passes ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Rewrite every occurrence of each token, in table order.
    #[default]
    Replace,
    /// Walk the input once, taking the longest token at each position.
    LongestMatch,
}

struct CompiledTable {
    table: KanaTable,
    trie: KanaTrie,
}

impl CompiledTable {
    fn new(table: KanaTable) -> Self {
        let trie = KanaTrie::build(&table);
        Self { table, trie }
    }
}

/// Romaji to kana converter holding one table per syllabary.
pub struct Transliterator {
    hiragana: CompiledTable,
    katakana: CompiledTable,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(
            KanaTable::builtin(Syllabary::Hiragana),
            KanaTable::builtin(Syllabary::Katakana),
        )
    }
}

impl Transliterator {
    pub fn new(hiragana: KanaTable, katakana: KanaTable) -> Self {
        Self {
            hiragana: CompiledTable::new(hiragana),
            katakana: CompiledTable::new(katakana),
        }
    }

    /// Build from custom table TOML; syllabaries it leaves out keep
    /// their built-in table.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        let mut custom = parse_table_toml(toml_str)?;
        let hiragana = custom
            .hiragana
            .take()
            .unwrap_or_else(|| KanaTable::builtin(Syllabary::Hiragana));
        let katakana = custom
            .katakana
            .take()
            .unwrap_or_else(|| KanaTable::builtin(Syllabary::Katakana));
        Ok(Self::new(hiragana, katakana))
    }

    /// Install custom tables before first `global()` call.
    pub fn init_custom(toml_content: &str) -> Result<(), TableConfigError> {
        let transliterator = Self::from_toml(toml_content)?;
        INSTANCE
            .set(transliterator)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Transliterator {
        INSTANCE.get_or_init(Transliterator::default)
    }

    pub fn table(&self, syllabary: Syllabary) -> &KanaTable {
        &self.compiled(syllabary).table
    }

    pub fn transliterate(&self, text: &str, syllabary: Syllabary) -> String {
        self.transliterate_with(text, syllabary, Strategy::Replace)
    }

    pub fn transliterate_with(
        &self,
        text: &str,
        syllabary: Syllabary,
        strategy: Strategy,
    ) -> String {
        let compiled = self.compiled(syllabary);

        let mut kana = mark_geminates(&text.trim().to_lowercase(), syllabary.sokuon());
        if let Some(mark) = syllabary.long_vowel_mark() {
            kana = mark_long_vowels(&kana, mark);
        }
        let kana = match strategy {
            Strategy::Replace => substitute(kana, &compiled.table),
            Strategy::LongestMatch => tokenize(&kana, &compiled.trie),
        };
        let kana = kana.trim().to_string();

        trace!(input = text, output = kana.as_str(), %syllabary, ?strategy);
        kana
    }

    fn compiled(&self, syllabary: Syllabary) -> &CompiledTable {
        match syllabary {
            Syllabary::Hiragana => &self.hiragana,
            Syllabary::Katakana => &self.katakana,
        }
    }
}

/// Convert romaji to kana with the global tables.
///
/// Never fails: characters no table entry covers are passed through.
pub fn transliterate(text: &str, syllabary: Syllabary) -> String {
    Transliterator::global().transliterate(text, syllabary)
}

/// Replace each doubled consonant with the small tsu plus one copy of the
/// consonant, one consonant at a time across the whole string.
fn mark_geminates(text: &str, sokuon: char) -> String {
    collapse_doubles(text, GEMINATE_CONSONANTS, |c| format!("{sokuon}{c}"))
}

/// Replace each doubled vowel with the vowel plus the prolonged sound mark.
fn mark_long_vowels(text: &str, mark: char) -> String {
    collapse_doubles(text, LONG_VOWELS, |c| format!("{c}{mark}"))
}

fn collapse_doubles(text: &str, letters: &str, rewrite: impl Fn(char) -> String) -> String {
    let mut out = text.to_string();
    for c in letters.chars() {
        let doubled = format!("{c}{c}");
        if out.contains(&doubled) {
            out = out.replace(&doubled, &rewrite(c));
        }
    }
    out
}

fn substitute(text: String, table: &KanaTable) -> String {
    table.iter().fold(text, |acc, (romaji, kana)| {
        if acc.contains(romaji) {
            acc.replace(romaji, kana)
        } else {
            acc
        }
    })
}

fn tokenize(text: &str, trie: &KanaTrie) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match trie.longest_match(rest.as_bytes()) {
            // Tokens are ASCII, so `len` always lands on a char boundary.
            Some((len, kana)) => {
                out.push_str(kana);
                rest = &rest[len..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_geminates() {
        assert_eq!(mark_geminates("katta", 'っ'), "kaっta");
        assert_eq!(mark_geminates("kippu", 'ッ'), "kiッpu");
        // n and vowels are never geminated
        assert_eq!(mark_geminates("honnou", 'っ'), "honnou");
    }

    #[test]
    fn test_mark_geminates_triple() {
        // Non-overlapping, leftmost first: "kk" then a lone "k" remains
        assert_eq!(mark_geminates("kkk", 'っ'), "っkk");
    }

    #[test]
    fn test_mark_long_vowels() {
        assert_eq!(mark_long_vowels("koohii", 'ー'), "koーhiー");
        assert_eq!(mark_long_vowels("aaa", 'ー'), "aーa");
    }

    #[test]
    fn test_substitute_order_matters() {
        let table = KanaTable::builtin(Syllabary::Hiragana);
        assert_eq!(substitute("shi".into(), &table), "し");
        assert_eq!(substitute("kyou".into(), &table), "きょう");
    }

    #[test]
    fn test_tokenize_passthrough() {
        let trie = KanaTrie::build(&KanaTable::builtin(Syllabary::Katakana));
        assert_eq!(tokenize("ka-ra 1", &trie), "カ-ラ 1");
        assert_eq!(tokenize("ッかna", &trie), "ッかナ");
    }

    #[test]
    fn test_from_toml_keeps_missing_builtin() {
        let toml = r#"
[hiragana]
mappings = [["ka", "カ"], ["a", "ア"]]
"#;
        let t = Transliterator::from_toml(toml).unwrap();
        assert_eq!(t.transliterate("kaa", Syllabary::Hiragana), "カア");
        assert_eq!(
            t.table(Syllabary::Katakana),
            &KanaTable::builtin(Syllabary::Katakana)
        );
        assert_eq!(t.transliterate("kaa", Syllabary::Katakana), "カー");
    }

    #[test]
    fn test_init_custom_after_global() {
        let _ = Transliterator::global();
        let err = Transliterator::init_custom("[hiragana]\nmappings = [[\"a\", \"あ\"]]\n")
            .unwrap_err();
        assert!(matches!(err, TableConfigError::AlreadyInitialized));
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = Transliterator::init_custom("[hiragana]\nmappings = []\n").unwrap_err();
        assert!(matches!(err, TableConfigError::Empty));
    }
}
