//! # Wordfind Main Entry Point
//!
//! Parses arguments, loads the word lists, generates the first board and runs
//! the macroquad game loop.

use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::Conf;
use macroquad::Window;
use std::path::PathBuf;
use std::time::Duration;
use wordfind::{
    config::DEFAULT_LOAD_TIMEOUT_MS, embedded_word_lists, load_word_lists_blocking, GameState,
    GenerationConfig, InputHandler, SceneManager, SelectionMode, WordListSet, WordfindResult,
};

/// Command line arguments for Wordfind.
#[derive(Parser, Debug)]
#[command(name = "wordfind")]
#[command(about = "A word-search puzzle game")]
#[command(version)]
struct Args {
    /// Random seed for board generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side length of the board in tiles
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Stop after placing this many words
    #[arg(long)]
    max_words: Option<usize>,

    /// Placement attempts per word before it is dropped
    #[arg(long)]
    attempts: Option<u32>,

    /// Word-list file to load instead of the built-in lists
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Name of the word list to play
    #[arg(short, long)]
    list: Option<String>,

    /// JSON file with a generation configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dragging over a selected tile keeps it selected instead of toggling it
    #[arg(long)]
    select_only: bool,

    /// How long to wait for the word-list file, in milliseconds
    #[arg(long, default_value_t = DEFAULT_LOAD_TIMEOUT_MS)]
    load_timeout_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the generated board to stdout and exit
    #[arg(long)]
    print: bool,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Wordfind v{}", wordfind::VERSION);

    let game_state = match prepare_round(&args) {
        Ok(state) => state,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.print {
        print_round(&game_state);
        return;
    }

    let window = Conf {
        window_title: "Wordfind".to_string(),
        window_width: 1024,
        window_height: 768,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    };

    Window::from_config(window, async move {
        if let Err(e) = run_game(game_state).await {
            error!("{}", e);
            std::process::exit(1);
        }
    });
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Loads the words and generates the first board.
fn prepare_round(args: &Args) -> WordfindResult<GameState> {
    let mut lists = load_lists(args)?;
    if let Some(name) = &args.list {
        lists.select(name)?;
    }

    let config = build_config(args)?;
    let mode = if args.select_only {
        SelectionMode::SelectOnly
    } else {
        SelectionMode::Toggle
    };

    let state = GameState::from_source(&lists, config, mode)?;
    if state.words.is_empty() {
        warn!("No words could be placed; the board holds only filler letters");
    }
    for word in &state.dropped_words {
        warn!("Left '{}' off the board", word);
    }
    Ok(state)
}

fn load_lists(args: &Args) -> WordfindResult<WordListSet> {
    match &args.words {
        Some(path) => load_word_lists_blocking(path, Duration::from_millis(args.load_timeout_ms)),
        None => embedded_word_lists(),
    }
}

/// Builds the generation config from an optional file plus argument overrides.
fn build_config(args: &Args) -> WordfindResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::new(time_seed()),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    }
    if let Some(max_words) = args.max_words {
        config.max_words_to_place = Some(max_words);
    }
    if let Some(attempts) = args.attempts {
        config.max_attempts_per_word = attempts;
    }

    config.validate()?;
    info!("Generating board with seed: {}", config.seed);
    Ok(config)
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn print_round(state: &GameState) {
    println!("{}", state.board.grid());
    for word in state.placed_words() {
        println!(
            "{} {} {}",
            word.text, word.placement.origin, word.placement.axis
        );
    }
}

/// Runs the main game loop with macroquad graphics.
async fn run_game(game_state: GameState) -> WordfindResult<()> {
    let mut scenes = SceneManager::new(game_state, InputHandler::new())?;
    scenes.run().await
}
