// sortty: step-by-step sorting visualizer for the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sortty::algorithms::Algorithm;
use sortty::config::{AppConfig, GeneralConfig};
use sortty::controller::Controller;
use sortty::frame::{Paced, TextStepper};
use sortty::ui::App;

#[derive(Parser)]
#[command(name = "sortty")]
#[command(author, version, about = "Watch sorting algorithms work, one comparison at a time")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to <config dir>/sortty/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    sort: SortArgs,
}

/// Overrides for the [sort] config section
#[derive(Args)]
struct SortArgs {
    /// Algorithm to select at startup
    #[arg(short, long, value_enum, global = true)]
    algorithm: Option<Algorithm>,

    /// Number of bars (10-1000)
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Pause after each frame in milliseconds
    #[arg(short, long, global = true)]
    delay_ms: Option<u64>,

    /// Seed for a reproducible dataset
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Sort one random dataset without the TUI, printing a line per frame
    Trace,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    apply_overrides(&mut config, &cli.sort);
    config.validate()?;

    match cli.command {
        Some(Commands::Run) | None => run_tui(&config),
        Some(Commands::Trace) => run_trace(&config),
    }
}

fn apply_overrides(config: &mut AppConfig, args: &SortArgs) {
    if let Some(algorithm) = args.algorithm {
        config.sort.algorithm = algorithm;
    }
    if let Some(count) = args.count {
        config.sort.element_count = count;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.sort.delay_ms = delay_ms;
    }
    if args.seed.is_some() {
        config.sort.seed = args.seed;
    }
}

fn env_filter(general: &GeneralConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&general.log_level))
}

/// The TUI owns the terminal, so logs only go to a file when one is configured
fn init_file_logging(general: &GeneralConfig) -> Result<()> {
    let Some(path) = &general.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(env_filter(general))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_logging(&config.general)?;

    let controller = Controller::new(&config.sort)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, config.sort.delay());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("TUI exited with an error")
}

fn run_trace(config: &AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(&config.general))
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let mut controller = Controller::new(&config.sort)?;
    let mut stepper = Paced::new(TextStepper::new(io::stdout().lock()), config.sort.delay());
    let summary = controller.run_live(&mut stepper)?;

    if stepper.into_inner().failed() {
        bail!("Failed to write frames to stdout");
    }
    println!(
        "{}: {} elements, {} frames, sorted = {}",
        summary.algorithm,
        summary.elements,
        summary.frames,
        controller.dataset().is_sorted()
    );
    Ok(())
}
