use std::io;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rtk_core::romaji::{Strategy, Transliterator};
use rtk_core::settings::{settings, SplitMode, SyllabaryChoice};

use crate::deck::{Deck, DeckOptions};
use crate::quiz::{build_cards, run_quiz, QuizOptions, QUIT_COMMAND};

/// Command-line overrides; `None` falls back to the loaded settings.
#[derive(Debug, Default)]
pub struct DrillArgs {
    pub mode: Option<SplitMode>,
    pub syllabary: Option<SyllabaryChoice>,
    pub strategy: Option<Strategy>,
    pub limit: Option<usize>,
    pub seed: Option<u64>,
    pub no_shuffle: bool,
}

pub fn drill_cmd(dir: &str, args: DrillArgs) {
    let s = settings();
    let deck_options = DeckOptions {
        mode: args.mode.unwrap_or(s.deck.mode),
        extension: s.deck.extension.clone(),
    };
    let quiz_options = QuizOptions {
        syllabary: args.syllabary.unwrap_or(s.quiz.syllabary),
        strategy: args.strategy.unwrap_or(s.engine.strategy),
        shuffle: s.quiz.shuffle && !args.no_shuffle,
        limit: args.limit.or(s.quiz.limit),
    };

    let deck = die!(
        Deck::load(Path::new(dir), &deck_options),
        "Error loading drill entries: {}"
    );
    if deck.is_empty() {
        println!(
            "No entries found in *.{} files under {dir}",
            deck_options.extension
        );
        return;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cards = build_cards(
        Transliterator::global(),
        deck.entries(),
        &quiz_options,
        &mut rng,
    );

    println!(
        "{} entries from {} files. Type the romaji and press Enter (empty to reveal, {QUIT_COMMAND} to quit).",
        deck.entries().len(),
        deck.source_count()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    die!(
        run_quiz(&cards, &mut stdin.lock(), &mut stdout.lock()),
        "Error during drill: {}"
    );
}
