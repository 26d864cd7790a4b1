use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use rtk_core::romaji::{Strategy, Syllabary, Transliterator};

/// Which syllabaries `convert` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertTarget {
    Hiragana,
    Katakana,
    Both,
}

impl ConvertTarget {
    fn syllabaries(self) -> &'static [Syllabary] {
        match self {
            ConvertTarget::Hiragana => &[Syllabary::Hiragana],
            ConvertTarget::Katakana => &[Syllabary::Katakana],
            ConvertTarget::Both => &Syllabary::ALL,
        }
    }
}

#[derive(Debug, Serialize)]
struct ConvertRecord<'a> {
    romaji: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hiragana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    katakana: Option<String>,
}

fn convert_one<'a>(
    t: &Transliterator,
    romaji: &'a str,
    target: ConvertTarget,
    strategy: Strategy,
) -> ConvertRecord<'a> {
    let mut record = ConvertRecord {
        romaji,
        hiragana: None,
        katakana: None,
    };
    for &syllabary in target.syllabaries() {
        let kana = t.transliterate_with(romaji, syllabary, strategy);
        match syllabary {
            Syllabary::Hiragana => record.hiragana = Some(kana),
            Syllabary::Katakana => record.katakana = Some(kana),
        }
    }
    record
}

pub fn convert_cmd(inputs: &[String], target: ConvertTarget, strategy: Strategy, json: bool) {
    let t = Transliterator::global();
    let records: Vec<ConvertRecord> = inputs
        .iter()
        .map(|romaji| convert_one(t, romaji, target, strategy))
        .collect();

    if json {
        for record in &records {
            println!(
                "{}",
                serde_json::to_string(record).expect("JSON serialization failed")
            );
        }
    } else {
        print!("{}", format_text(&records));
    }
}

/// One row per input, columns padded by display width so kana line up.
fn format_text(records: &[ConvertRecord]) -> String {
    let romaji_width = records
        .iter()
        .map(|r| UnicodeWidthStr::width(r.romaji))
        .max()
        .unwrap_or(0);
    let hiragana_width = records
        .iter()
        .filter_map(|r| r.hiragana.as_deref())
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for r in records {
        let mut row = pad(r.romaji, romaji_width);
        match (&r.hiragana, &r.katakana) {
            (Some(h), Some(k)) => {
                row.push_str("  ");
                row.push_str(&pad(h, hiragana_width));
                row.push_str("  ");
                row.push_str(k);
            }
            (Some(kana), None) | (None, Some(kana)) => {
                row.push_str("  ");
                row.push_str(kana);
            }
            (None, None) => {}
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_one_both() {
        let t = Transliterator::default();
        let r = convert_one(&t, "koohii", ConvertTarget::Both, Strategy::Replace);
        assert_eq!(r.hiragana.as_deref(), Some("こおひい"));
        assert_eq!(r.katakana.as_deref(), Some("コーヒー"));
    }

    #[test]
    fn test_convert_one_single() {
        let t = Transliterator::default();
        let r = convert_one(&t, "kippu", ConvertTarget::Katakana, Strategy::LongestMatch);
        assert_eq!(r.hiragana, None);
        assert_eq!(r.katakana.as_deref(), Some("キップ"));
    }

    #[test]
    fn test_json_skips_missing_syllabary() {
        let t = Transliterator::default();
        let r = convert_one(&t, "kyou", ConvertTarget::Hiragana, Strategy::Replace);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"romaji":"kyou","hiragana":"きょう"}"#);
    }

    #[test]
    fn test_format_text_aligns_by_display_width() {
        let t = Transliterator::default();
        let records = vec![
            convert_one(&t, "kyou", ConvertTarget::Both, Strategy::Replace),
            convert_one(&t, "arigatou", ConvertTarget::Both, Strategy::Replace),
        ];
        let text = format_text(&records);
        assert_eq!(
            text,
            "kyou      きょう      キョウ\n\
             arigatou  ありがとう  アリガトウ\n"
        );
    }
}
