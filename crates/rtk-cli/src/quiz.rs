//! Interactive flashcard loop: show kana, wait for an answer, reveal the romaji.

use std::io::{self, BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use rtk_core::romaji::{Strategy, Syllabary, Transliterator};
use rtk_core::settings::SyllabaryChoice;
use tracing::{debug, debug_span};

/// Typing this instead of an answer ends the drill.
pub const QUIT_COMMAND: &str = ":q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub romaji: String,
    pub kana: String,
    pub syllabary: Syllabary,
}

impl Card {
    /// A non-empty answer matching the romaji, ignoring case and surrounding space.
    pub fn is_correct(&self, answer: &str) -> bool {
        let answer = answer.trim();
        !answer.is_empty() && answer.eq_ignore_ascii_case(self.romaji.trim())
    }
}

#[derive(Debug, Clone)]
pub struct QuizOptions {
    pub syllabary: SyllabaryChoice,
    pub strategy: Strategy,
    pub shuffle: bool,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub shown: usize,
    pub answered: usize,
    pub correct: usize,
}

/// Turn deck entries into cards, picking a syllabary per card.
pub fn build_cards<R: Rng + ?Sized>(
    transliterator: &Transliterator,
    entries: &[String],
    options: &QuizOptions,
    rng: &mut R,
) -> Vec<Card> {
    let _span = debug_span!("build_cards", entry_count = entries.len()).entered();

    let mut order: Vec<&String> = entries.iter().collect();
    if options.shuffle {
        order.shuffle(rng);
    }
    if let Some(limit) = options.limit {
        order.truncate(limit);
    }

    let cards: Vec<Card> = order
        .into_iter()
        .map(|romaji| {
            let syllabary = options.syllabary.fixed().unwrap_or_else(|| {
                if rng.random_bool(0.5) {
                    Syllabary::Hiragana
                } else {
                    Syllabary::Katakana
                }
            });
            Card {
                romaji: romaji.clone(),
                kana: transliterator.transliterate_with(romaji, syllabary, options.strategy),
                syllabary,
            }
        })
        .collect();

    debug!(card_count = cards.len());
    cards
}

/// Run the drill over `cards`, reading answers from `input` and writing
/// prompts to `output`. Stops early on end of input or `:q`.
pub fn run_quiz<I: BufRead, O: Write>(
    cards: &[Card],
    input: &mut I,
    output: &mut O,
) -> io::Result<QuizSummary> {
    let mut summary = QuizSummary::default();
    let total = cards.len();
    let mut line = String::new();

    for (i, card) in cards.iter().enumerate() {
        writeln!(output, "[{}/{}] {}", i + 1, total, card.kana)?;
        write!(output, "> ")?;
        output.flush()?;
        summary.shown += 1;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let answer = line.trim();
        if answer == QUIT_COMMAND {
            break;
        }

        if answer.is_empty() {
            writeln!(output, "  = {}", card.romaji)?;
        } else {
            summary.answered += 1;
            let mark = if card.is_correct(answer) {
                summary.correct += 1;
                "o"
            } else {
                "x"
            };
            writeln!(output, "  {mark} {}", card.romaji)?;
        }
    }

    writeln!(
        output,
        "{} shown, {}/{} answered correctly",
        summary.shown, summary.correct, summary.answered
    )?;
    Ok(summary)
}
