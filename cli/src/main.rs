//! `tint` command line entry point.

mod commands;
mod paths;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt};

use commands::{assign, clear, generate, inspect, show};

/// Distinct workspace colors from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tint", version, about, long_about = None)]
struct Cli {
    /// Output in JSON format (machine-readable).
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to ~/.tintspace/tintspace.toml).
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Color store file (defaults to ~/.tintspace/colors.toml).
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random color without storing it.
    Generate(generate::Args),

    /// Show what tintspace derives from a color.
    Inspect(inspect::Args),

    /// Assign a color to a workspace.
    Assign(assign::Args),

    /// Show stored workspace colors.
    Show(show::Args),

    /// Forget a workspace's color.
    Clear(clear::Args),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;
    init_tracing();

    let cli = Cli::parse();
    shell::init(cli.json);

    let paths = paths::Paths::resolve(cli.settings, cli.store);

    match cli.command {
        Commands::Generate(args) => generate::run(args, &paths),
        Commands::Inspect(args) => inspect::run(&args),
        Commands::Assign(args) => assign::run(args, &paths),
        Commands::Show(args) => show::run(args, &paths),
        Commands::Clear(args) => clear::run(&args, &paths),
    }
}
