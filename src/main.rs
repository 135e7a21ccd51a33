use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use droplist::Config;
use droplist::cli::{Cli, Commands};
use droplist::commands::{cmd_completions, cmd_config, cmd_pick};

const LOG_ENV: &str = "DROPLIST_LOG";

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        // Cancelled pick
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Pick(args) => {
            init_logging();
            let mut config = Config::load()?;
            args.apply(&mut config);
            cmd_pick(&config, args.options.as_deref())
        }
        Commands::Config { path } => cmd_config(path).map(|()| true),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(true)
        }
    }
}

/// Log to a file in the data directory; the terminal belongs to the picker.
/// Logging stays off if the directory can't be created.
fn init_logging() {
    let Ok(dir) = Config::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let appender = tracing_appender::rolling::never(&dir, "droplist.log");
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init();
}
