use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flashdeck_core::model::Flashcard;
use services::{DeckConfig, FlashcardLoader, FlashcardSource};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const CARDS_ENV: &str = "FLASHDECK_CARDS";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCardsPath { raw: String },
    InvalidReshuffleSecs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCardsPath { raw } => write!(f, "invalid --cards value: {raw:?}"),
            ArgsError::InvalidReshuffleSecs { raw } => {
                write!(f, "invalid --reshuffle-secs value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    cards: Vec<Flashcard>,
    config: DeckConfig,
}

impl UiApp for DesktopApp {
    fn initial_cards(&self) -> Vec<Flashcard> {
        self.cards.clone()
    }

    fn deck_config(&self) -> DeckConfig {
        self.config
    }
}

#[derive(Debug)]
struct Args {
    cards: Option<PathBuf>,
    reshuffle_secs: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--cards <path>] [--reshuffle-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  cards from the bundled flashcards.xml");
    eprintln!("  --reshuffle-secs 15");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHDECK_CARDS, FLASHDECK_RESHUFFLE_SECS, FLASHDECK_FLIP_MS, RUST_LOG");
}

impl Args {
    /// `cards_env` is the raw `FLASHDECK_CARDS` value; `--cards` overrides it.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        cards_env: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            cards: cards_env
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            reshuffle_secs: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--cards" => {
                    let value = require_value(args, "--cards")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCardsPath { raw: value });
                    }
                    parsed.cards = Some(PathBuf::from(value));
                }
                "--reshuffle-secs" => {
                    let value = require_value(args, "--reshuffle-secs")?;
                    let secs = value
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidReshuffleSecs { raw: value.clone() })?;
                    parsed.reshuffle_secs = Some(secs);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn source(&self) -> FlashcardSource {
        self.cards
            .clone()
            .map_or(FlashcardSource::Bundled, FlashcardSource::File)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, std::env::var(CARDS_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut config = DeckConfig::from_env()?;
    if let Some(secs) = args.reshuffle_secs {
        config = config.with_reshuffle_interval(Duration::from_secs(secs));
    }

    // Parsed once, before the window exists; a bad resource shows an empty deck.
    let cards = FlashcardLoader::new(args.source()).load_or_empty();
    info!(
        cards = cards.len(),
        reshuffle_secs = config.reshuffle_interval().as_secs(),
        flip_ms = config.flip_duration().as_millis(),
        "launching flashcards window"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { cards, config });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
