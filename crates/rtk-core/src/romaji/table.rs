use std::collections::HashSet;
use std::fmt;

use super::config::TableConfigError;

/// Consonants whose doubling marks a geminate (sokuon), in application order.
pub const GEMINATE_CONSONANTS: &str = "zrtpqsdfghjklmwxcvb";

/// Vowels whose doubling marks a long vowel in katakana, in application order.
pub const LONG_VOWELS: &str = "aeuio";

/// Longest token length accepted in a table.
pub const MAX_TOKEN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syllabary {
    Hiragana,
    Katakana,
}

impl Syllabary {
    pub const ALL: [Syllabary; 2] = [Syllabary::Hiragana, Syllabary::Katakana];

    /// Small tsu written before a doubled consonant.
    pub fn sokuon(self) -> char {
        match self {
            Syllabary::Hiragana => 'っ',
            Syllabary::Katakana => 'ッ',
        }
    }

    /// Prolonged sound mark written after a doubled vowel.
    /// Hiragana spells long vowels out, so it has none.
    pub fn long_vowel_mark(self) -> Option<char> {
        match self {
            Syllabary::Hiragana => None,
            Syllabary::Katakana => Some('ー'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Syllabary::Hiragana => "hiragana",
            Syllabary::Katakana => "katakana",
        }
    }
}

impl fmt::Display for Syllabary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Table order is load-bearing: substitution walks these top to bottom, so a
// token must never precede a longer token that contains it. Entries are
// grouped by length, longest first; bare vowels and `n` come last.

pub const HIRAGANA: &[(&str, &str)] = &[
    ("xtsu", "っ"),
    // palatalized
    ("kya", "きゃ"),
    ("kyu", "きゅ"),
    ("kyo", "きょ"),
    ("sha", "しゃ"),
    ("shu", "しゅ"),
    ("she", "しぇ"),
    ("sho", "しょ"),
    ("shi", "し"),
    ("cha", "ちゃ"),
    ("chu", "ちゅ"),
    ("che", "ちぇ"),
    ("cho", "ちょ"),
    ("chi", "ち"),
    ("tsu", "つ"),
    ("nya", "にゃ"),
    ("nyu", "にゅ"),
    ("nyo", "にょ"),
    ("hya", "ひゃ"),
    ("hyu", "ひゅ"),
    ("hyo", "ひょ"),
    ("mya", "みゃ"),
    ("myu", "みゅ"),
    ("myo", "みょ"),
    ("rya", "りゃ"),
    ("ryu", "りゅ"),
    ("ryo", "りょ"),
    ("gya", "ぎゃ"),
    ("gyu", "ぎゅ"),
    ("gyo", "ぎょ"),
    ("jya", "じゃ"),
    ("jyu", "じゅ"),
    ("jyo", "じょ"),
    ("bya", "びゃ"),
    ("byu", "びゅ"),
    ("byo", "びょ"),
    ("pya", "ぴゃ"),
    ("pyu", "ぴゅ"),
    ("pyo", "ぴょ"),
    ("xya", "ゃ"),
    ("xyu", "ゅ"),
    ("xyo", "ょ"),
    ("xtu", "っ"),
    // k
    ("ka", "か"),
    ("ki", "き"),
    ("ku", "く"),
    ("ke", "け"),
    ("ko", "こ"),
    // s
    ("sa", "さ"),
    ("su", "す"),
    ("se", "せ"),
    ("so", "そ"),
    // t
    ("ta", "た"),
    ("te", "て"),
    ("to", "と"),
    // n
    ("n'", "ん"),
    ("na", "な"),
    ("ni", "に"),
    ("nu", "ぬ"),
    ("ne", "ね"),
    ("no", "の"),
    // h
    ("ha", "は"),
    ("hi", "ひ"),
    ("fu", "ふ"),
    ("he", "へ"),
    ("ho", "ほ"),
    // m
    ("ma", "ま"),
    ("mi", "み"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    // y
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    // r
    ("ra", "ら"),
    ("ri", "り"),
    ("ru", "る"),
    ("re", "れ"),
    ("ro", "ろ"),
    // w
    ("wa", "わ"),
    ("wo", "を"),
    // g
    ("ga", "が"),
    ("gi", "ぎ"),
    ("gu", "ぐ"),
    ("ge", "げ"),
    ("go", "ご"),
    // z
    ("za", "ざ"),
    ("ji", "じ"),
    ("zu", "ず"),
    ("ze", "ぜ"),
    ("zo", "ぞ"),
    ("ja", "じゃ"),
    ("ju", "じゅ"),
    ("je", "じぇ"),
    ("jo", "じょ"),
    // d
    ("da", "だ"),
    ("di", "ぢ"),
    ("du", "づ"),
    ("de", "で"),
    ("do", "ど"),
    // b
    ("ba", "ば"),
    ("bi", "び"),
    ("bu", "ぶ"),
    ("be", "べ"),
    ("bo", "ぼ"),
    // p
    ("pa", "ぱ"),
    ("pi", "ぴ"),
    ("pu", "ぷ"),
    ("pe", "ぺ"),
    ("po", "ぽ"),
    // f
    ("fa", "ふぁ"),
    ("fi", "ふぃ"),
    ("fe", "ふぇ"),
    ("fo", "ふぉ"),
    // small vowels
    ("xa", "ぁ"),
    ("xi", "ぃ"),
    ("xu", "ぅ"),
    ("xe", "ぇ"),
    ("xo", "ぉ"),
    // vowels
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    ("n", "ん"),
];

pub const KATAKANA: &[(&str, &str)] = &[
    ("xtsu", "ッ"),
    // palatalized
    ("kya", "キャ"),
    ("kyu", "キュ"),
    ("kyo", "キョ"),
    ("sha", "シャ"),
    ("shu", "シュ"),
    ("she", "シェ"),
    ("sho", "ショ"),
    ("shi", "シ"),
    ("cha", "チャ"),
    ("chu", "チュ"),
    ("che", "チェ"),
    ("cho", "チョ"),
    ("chi", "チ"),
    ("tsa", "ツァ"),
    ("tsu", "ツ"),
    ("nya", "ニャ"),
    ("nyu", "ニュ"),
    ("nyo", "ニョ"),
    ("hya", "ヒャ"),
    ("hyu", "ヒュ"),
    ("hyo", "ヒョ"),
    ("mya", "ミャ"),
    ("myu", "ミュ"),
    ("myo", "ミョ"),
    ("rya", "リャ"),
    ("ryu", "リュ"),
    ("ryo", "リョ"),
    ("gya", "ギャ"),
    ("gyu", "ギュ"),
    ("gyo", "ギョ"),
    ("jya", "ジャ"),
    ("jyu", "ジュ"),
    ("jyo", "ジョ"),
    ("dyu", "デュ"),
    ("bya", "ビャ"),
    ("byu", "ビュ"),
    ("byo", "ビョ"),
    ("pya", "ピャ"),
    ("pyu", "ピュ"),
    ("pyo", "ピョ"),
    ("xya", "ャ"),
    ("xyu", "ュ"),
    ("xyo", "ョ"),
    ("xtu", "ッ"),
    // k
    ("ka", "カ"),
    ("ki", "キ"),
    ("ku", "ク"),
    ("ke", "ケ"),
    ("ko", "コ"),
    // s
    ("sa", "サ"),
    ("su", "ス"),
    ("se", "セ"),
    ("so", "ソ"),
    // t
    ("ta", "タ"),
    ("ti", "ティ"),
    ("te", "テ"),
    ("to", "ト"),
    // n
    ("n'", "ン"),
    ("na", "ナ"),
    ("ni", "ニ"),
    ("nu", "ヌ"),
    ("ne", "ネ"),
    ("no", "ノ"),
    // h
    ("ha", "ハ"),
    ("hi", "ヒ"),
    ("fu", "フ"),
    ("he", "ヘ"),
    ("ho", "ホ"),
    // m
    ("ma", "マ"),
    ("mi", "ミ"),
    ("mu", "ム"),
    ("me", "メ"),
    ("mo", "モ"),
    // y
    ("ya", "ヤ"),
    ("yu", "ユ"),
    ("yo", "ヨ"),
    // r
    ("ra", "ラ"),
    ("ri", "リ"),
    ("ru", "ル"),
    ("re", "レ"),
    ("ro", "ロ"),
    // w
    ("wa", "ワ"),
    ("wi", "ウィ"),
    ("we", "ウェ"),
    ("wo", "ヲ"),
    // g
    ("ga", "ガ"),
    ("gi", "ギ"),
    ("gu", "グ"),
    ("ge", "ゲ"),
    ("go", "ゴ"),
    // z
    ("za", "ザ"),
    ("ji", "ジ"),
    ("zu", "ズ"),
    ("ze", "ゼ"),
    ("zo", "ゾ"),
    ("ja", "ジャ"),
    ("ju", "ジュ"),
    ("je", "ジェ"),
    ("jo", "ジョ"),
    // d
    ("da", "ダ"),
    ("di", "ディ"),
    ("du", "ドゥ"),
    ("de", "デ"),
    ("do", "ド"),
    // b
    ("ba", "バ"),
    ("bi", "ビ"),
    ("bu", "ブ"),
    ("be", "ベ"),
    ("bo", "ボ"),
    // p
    ("pa", "パ"),
    ("pi", "ピ"),
    ("pu", "プ"),
    ("pe", "ペ"),
    ("po", "ポ"),
    // f
    ("fa", "ファ"),
    ("fi", "フィ"),
    ("fe", "フェ"),
    ("fo", "フォ"),
    // v
    ("va", "ヴァ"),
    ("vi", "ヴィ"),
    ("vu", "ヴ"),
    ("ve", "ヴェ"),
    ("vo", "ヴォ"),
    // small vowels
    ("xa", "ァ"),
    ("xi", "ィ"),
    ("xu", "ゥ"),
    ("xe", "ェ"),
    ("xo", "ォ"),
    // vowels
    ("a", "ア"),
    ("i", "イ"),
    ("u", "ウ"),
    ("e", "エ"),
    ("o", "オ"),
    ("n", "ン"),
];

/// Built-in mappings for a syllabary, in application order.
pub fn builtin_mappings(syllabary: Syllabary) -> &'static [(&'static str, &'static str)] {
    match syllabary {
        Syllabary::Hiragana => HIRAGANA,
        Syllabary::Katakana => KATAKANA,
    }
}

/// An ordered romaji → kana table that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaTable {
    entries: Vec<(String, String)>,
}

impl KanaTable {
    /// Validate and wrap `entries`, keeping their order.
    pub fn new(entries: Vec<(String, String)>) -> Result<Self, TableConfigError> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    pub fn builtin(syllabary: Syllabary) -> Self {
        let entries = builtin_mappings(syllabary)
            .iter()
            .map(|&(romaji, kana)| (romaji.to_string(), kana.to_string()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(romaji, kana)| (romaji.as_str(), kana.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entries(entries: &[(String, String)]) -> Result<(), TableConfigError> {
    if entries.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut seen = HashSet::new();
    for (romaji, kana) in entries {
        // Input is lowercased before lookup, so uppercase keys could never match.
        if romaji.is_empty()
            || romaji.len() > MAX_TOKEN_LEN
            || !romaji.is_ascii()
            || romaji.bytes().any(|b| b.is_ascii_uppercase())
        {
            return Err(TableConfigError::InvalidKey(romaji.clone()));
        }
        if kana.is_empty() {
            return Err(TableConfigError::EmptyValue(romaji.clone()));
        }
        if !seen.insert(romaji.as_str()) {
            return Err(TableConfigError::Duplicate(romaji.clone()));
        }
    }

    // An earlier token inside a later one would be rewritten first and
    // leave the later token unmatchable.
    for (i, (earlier, _)) in entries.iter().enumerate() {
        if let Some((later, _)) = entries[i + 1..]
            .iter()
            .find(|(later, _)| later.len() > earlier.len() && later.contains(earlier.as_str()))
        {
            return Err(TableConfigError::Shadowed {
                earlier: earlier.clone(),
                later: later.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|&(r, k)| (r.to_string(), k.to_string()))
            .collect()
    }

    #[test]
    fn builtin_tables_satisfy_order_contract() {
        for syllabary in Syllabary::ALL {
            let entries = owned(builtin_mappings(syllabary));
            KanaTable::new(entries)
                .unwrap_or_else(|e| panic!("{syllabary} table is invalid: {e}"));
        }
    }

    #[test]
    fn builtin_tables_are_longest_first() {
        for syllabary in Syllabary::ALL {
            let lengths: Vec<usize> = builtin_mappings(syllabary)
                .iter()
                .filter(|(romaji, _)| *romaji != "n'" && *romaji != "n")
                .map(|(romaji, _)| romaji.len())
                .collect();
            assert!(
                lengths.windows(2).all(|w| w[0] >= w[1]),
                "{syllabary} table is not grouped longest first"
            );
        }
    }

    #[test]
    fn builtin_tables_cover_basic_moras() {
        for syllabary in Syllabary::ALL {
            let table = KanaTable::builtin(syllabary);
            for romaji in ["a", "i", "u", "e", "o", "n", "shi", "chi", "tsu", "fu", "ji", "kya"] {
                assert!(
                    table.iter().any(|(r, _)| r == romaji),
                    "{syllabary} table is missing {romaji}"
                );
            }
        }
    }

    #[test]
    fn sokuon_and_long_vowel_mark() {
        assert_eq!(Syllabary::Hiragana.sokuon(), 'っ');
        assert_eq!(Syllabary::Katakana.sokuon(), 'ッ');
        assert_eq!(Syllabary::Hiragana.long_vowel_mark(), None);
        assert_eq!(Syllabary::Katakana.long_vowel_mark(), Some('ー'));
    }

    #[test]
    fn error_empty_table() {
        let err = KanaTable::new(Vec::new()).unwrap_err();
        assert!(matches!(err, TableConfigError::Empty));
    }

    #[test]
    fn error_shadowed_token() {
        let err = KanaTable::new(owned(&[("a", "あ"), ("ka", "か")])).unwrap_err();
        match err {
            TableConfigError::Shadowed { earlier, later } => {
                assert_eq!(earlier, "a");
                assert_eq!(later, "ka");
            }
            other => panic!("expected Shadowed, got {other:?}"),
        }
    }

    #[test]
    fn error_suffix_shadowing_is_caught() {
        // "hi" before "shi" would turn "shi" into "sひ"
        let err = KanaTable::new(owned(&[("hi", "ひ"), ("shi", "し")])).unwrap_err();
        assert!(matches!(err, TableConfigError::Shadowed { .. }));
    }

    #[test]
    fn error_duplicate_key() {
        let err = KanaTable::new(owned(&[("ka", "か"), ("ka", "カ")])).unwrap_err();
        assert!(matches!(err, TableConfigError::Duplicate(ref k) if k == "ka"));
    }

    #[test]
    fn error_invalid_keys() {
        for key in ["", "kyaaa", "あ", "KA"] {
            let err = KanaTable::new(owned(&[(key, "x")])).unwrap_err();
            assert!(matches!(err, TableConfigError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[test]
    fn error_empty_value() {
        let err = KanaTable::new(owned(&[("ka", "")])).unwrap_err();
        assert!(matches!(err, TableConfigError::EmptyValue(_)));
    }
}
