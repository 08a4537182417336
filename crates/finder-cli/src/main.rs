//! Assessment Finder CLI - find assessments that match a job description.

use clap::Parser;
use finder_cli::commands;
use finder_cli::repl;
use finder_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> finder_cli::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_or_init(path)?,
        None => Config::load()?,
    };

    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    if !color_enabled {
        colored::control::set_override(false);
    }
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter)?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &formatter).await?;
        }
        command => {
            let mut session = Session::from_config(&config)?;

            match command {
                None | Some(Command::Repl) => {
                    repl::run_repl(&mut config, &mut session, &formatter).await?;
                }
                Some(Command::Recommend(args)) => {
                    commands::execute_recommend(args, &mut session, &formatter).await?;
                }
                Some(Command::Queries(args)) => {
                    commands::execute_queries(args, &mut session, &formatter).await?;
                }
                Some(Command::Health(args)) => {
                    commands::execute_health(args, &session, &formatter).await?;
                }
                Some(Command::Profile(_)) | Some(Command::Extract(_)) => unreachable!(),
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
