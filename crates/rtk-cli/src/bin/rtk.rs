use clap::{Parser, Subcommand, ValueEnum};

use rtk_cli::commands::convert_ops::ConvertTarget;
use rtk_cli::commands::drill_ops::DrillArgs;
use rtk_cli::commands::{config_ops, convert_ops, drill_ops};
use rtk_cli::trace_init::init_tracing;
use rtk_core::romaji::Strategy;
use rtk_core::settings::{SplitMode, SyllabaryChoice};

#[derive(Parser)]
#[command(name = "rtk", about = "Romaji to kana flashcard drills")]
struct Cli {
    /// Emit logs as JSON (filter with RTK_LOG)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum SyllabaryArg {
    Hiragana,
    Katakana,
    Random,
}

impl From<SyllabaryArg> for SyllabaryChoice {
    fn from(arg: SyllabaryArg) -> Self {
        match arg {
            SyllabaryArg::Hiragana => SyllabaryChoice::Hiragana,
            SyllabaryArg::Katakana => SyllabaryChoice::Katakana,
            SyllabaryArg::Random => SyllabaryChoice::Random,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Replace,
    LongestMatch,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Replace => Strategy::Replace,
            StrategyArg::LongestMatch => Strategy::LongestMatch,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Quiz yourself on words collected from a folder of text files
    Drill {
        /// Folder searched recursively for source files
        dir: String,
        /// Use whole lines instead of whitespace-separated words
        #[arg(long)]
        lines: bool,
        /// Syllabary to show (default from settings)
        #[arg(long, value_enum)]
        syllabary: Option<SyllabaryArg>,
        /// Maximum number of cards
        #[arg(short, long)]
        limit: Option<usize>,
        /// Seed for a reproducible card order
        #[arg(long)]
        seed: Option<u64>,
        /// Keep the order entries were found in
        #[arg(long)]
        no_shuffle: bool,
        /// Table application strategy (default from settings)
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        /// Custom romaji table TOML
        #[arg(long)]
        table: Option<String>,
        /// Custom settings TOML
        #[arg(long)]
        settings: Option<String>,
    },
    /// Convert romaji to kana and print the result
    Convert {
        /// Romaji text, one result row per argument
        #[arg(required = true)]
        text: Vec<String>,
        /// Syllabary to print
        #[arg(long, value_enum, default_value = "both")]
        syllabary: ConvertTarget,
        /// Table application strategy
        #[arg(long, value_enum, default_value = "replace")]
        strategy: StrategyArg,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Custom romaji table TOML
        #[arg(long)]
        table: Option<String>,
    },
    /// Export the built-in romaji tables as TOML
    TableExport,
    /// Validate a custom romaji table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Drill {
            dir,
            lines,
            syllabary,
            limit,
            seed,
            no_shuffle,
            strategy,
            table,
            settings,
        } => {
            if let Some(ref file) = settings {
                config_ops::load_settings(file);
            }
            if let Some(ref file) = table {
                config_ops::load_tables(file);
            }
            drill_ops::drill_cmd(
                &dir,
                DrillArgs {
                    mode: lines.then_some(SplitMode::Lines),
                    syllabary: syllabary.map(Into::into),
                    strategy: strategy.map(Into::into),
                    limit,
                    seed,
                    no_shuffle,
                },
            );
        }
        Command::Convert {
            text,
            syllabary,
            strategy,
            json,
            table,
        } => {
            if let Some(ref file) = table {
                config_ops::load_tables(file);
            }
            convert_ops::convert_cmd(&text, syllabary, strategy.into(), json);
        }
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
