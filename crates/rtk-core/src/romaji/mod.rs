//! Romaji-to-kana transliteration.
//!
//! Each syllabary has an ordered table of romaji tokens. Conversion marks
//! doubled consonants with a small tsu (and, in katakana, doubled vowels
//! with a prolonged sound mark), then rewrites tokens to kana in table order.

mod config;
mod table;
mod transliterate;
mod trie;


pub use config::{default_toml, parse_table_toml, CustomTables, TableConfigError};
pub use table::{
    builtin_mappings, KanaTable, Syllabary, GEMINATE_CONSONANTS, HIRAGANA, KATAKANA, LONG_VOWELS,
    MAX_TOKEN_LEN,
};
pub use transliterate::{transliterate, Strategy, Transliterator};
pub use trie::KanaTrie;
