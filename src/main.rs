use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use projectmgt::commands::{Command, Context};
use projectmgt_core::{CoreError, THEME_PATH_ENV, Theme};

/// projectmgt - inspect the project timeline from the command line
#[derive(Parser)]
#[command(name = "pmt")]
#[command(version = "0.1.0")]
#[command(about = "Inspect the project timeline, progress ring and row layout", long_about = None)]
struct Args {
    /// Path to a JSON theme file (can also be set via PMT_THEME env var)
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
///
/// Examples:
/// - `RUST_LOG=debug` - show theme resolution and layout decisions
/// - `RUST_LOG=warn` - show scattered time-codes and clamped progress
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> Result<(), CoreError> {
    let args = Args::parse();
    let output = run_with_args(&args)?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments and return what to print.
fn run_with_args(args: &Args) -> Result<String, CoreError> {
    // Theme priority: --theme > PMT_THEME > config dir > built-in
    let theme = Theme::resolve(args.theme.clone())?;
    let ctx = Context::sample(theme);

    match &args.command {
        Some(cmd) => cmd.execute(&ctx),
        None => Ok(format!(
            "Welcome to projectmgt!\nUse 'pmt --help' for usage information.\nTheme file: --theme <path> or {}",
            THEME_PATH_ENV
        )),
    }
}
