//! Byttbranch - switch git branches without losing in-progress work

use std::path::PathBuf;

use anyhow::{Context, Result};
use byttbranch::paths;
use byttbranch::{Config, Settings, Verbosity};
use clap::{CommandFactory, Parser};

/// Switch git branches without losing in-progress work
#[derive(Parser)]
#[command(name = "byttbranch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Branch to switch to
    branch: String,

    /// Repository directory
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Also print the output of every git command
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Print nothing but errors
    #[arg(short, long)]
    quiet: bool,

    /// Main branch that new branches are created from, `main` unless configured
    #[arg(short, long, value_name = "NAME")]
    main_branch: Option<String>,
}

impl Cli {
    const fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let settings = Settings::load()?;
    let config = Config::resolve(
        cli.directory.clone(),
        &settings,
        cli.main_branch.clone(),
        cli.verbosity(),
    );
    tracing::debug!(?config, branch = %cli.branch, "Resolved configuration");

    let summary = byttbranch::switch_branch(&config, &cli.branch)
        .with_context(|| format!("Failed to switch to branch '{}'", cli.branch))?;
    tracing::info!(?summary, "Finished");

    if config.verbosity.shows_progress() {
        println!("Done!");
    }
    Ok(())
}

fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    if let (Some(dir), Some(file_name)) = (log_path.parent(), log_path.file_name()) {
        let file_appender = tracing_appender::rolling::never(dir, file_name);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}
