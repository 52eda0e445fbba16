use clap::{Parser, Subcommand, ValueEnum};

use pali_cli::commands::config_ops;
use pali_cli::commands::convert_ops::{self, ConvertFlags};
use pali_cli::commands::search_ops::{self, SearchFlags};
use pali_core::unicode::Niggahita;

#[derive(Parser)]
#[command(name = "palitool", about = "Pali script conversion and search tool")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a romanized document to another script
    Convert {
        /// Target script: THAI, KHMER, MYANMAR, SINHALA, DEVANAGARI or ROMAN
        script: String,
        /// Plain text file, or a `.json` document
        file: String,
        /// Use native numerals
        #[arg(long)]
        numbers: bool,
        /// Use the alternate Thai glyph set
        #[arg(long)]
        alt: bool,
        /// Use the script's own full stop
        #[arg(long)]
        native_period: bool,
    },
    /// Search a document and list every match
    Search {
        /// Plain text file, or a `.json` document
        file: String,
        /// Literal text, or a pattern with --regex
        query: String,
        #[arg(long)]
        regex: bool,
        /// Match whole words only (regex mode)
        #[arg(long)]
        whole_word: bool,
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Guess the script a text file is written in
    Detect {
        file: String,
        /// Number of leading characters to inspect
        #[arg(long)]
        sample: Option<usize>,
    },
    /// Rewrite the niggahita letter (ŋ or ṃ)
    Niggahita {
        file: String,
        #[arg(long, value_enum)]
        to: NiggahitaArg,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NiggahitaArg {
    /// ŋ Ŋ
    Old,
    /// ṃ Ṃ
    New,
}

impl From<NiggahitaArg> for Niggahita {
    fn from(arg: NiggahitaArg) -> Self {
        match arg {
            NiggahitaArg::Old => Niggahita::Old,
            NiggahitaArg::New => Niggahita::New,
        }
    }
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("pali_core=debug,pali_session=debug")
            }),
        )
        .init();
}

fn main() {
    #[cfg(feature = "trace")]
    init_tracing();

    let cli = Cli::parse();
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Convert {
            script,
            file,
            numbers,
            alt,
            native_period,
        } => convert_ops::convert_cmd(
            &script,
            &file,
            ConvertFlags {
                numbers,
                alternate: alt,
                native_period,
            },
        ),
        Command::Search {
            file,
            query,
            regex,
            whole_word,
            case_sensitive,
        } => search_ops::search_cmd(
            &file,
            &query,
            SearchFlags {
                regex,
                whole_word,
                case_sensitive,
            },
        ),
        Command::Detect { file, sample } => convert_ops::detect_cmd(&file, sample),
        Command::Niggahita { file, to } => convert_ops::niggahita_cmd(&file, to.into()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
