//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each command runs to completion before the next line is read, so at most
//! one search request is ever in flight.

use crate::cli::{
    Command, ExtractArgs, HealthArgs, ProfileAction, ProfileArgs, QueriesArgs, RecommendArgs,
};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use finder_domain::TopK;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &mut Config, session: &mut Session, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Assessment Finder REPL - Type 'help' for commands, 'exit' to quit")
    );

    let available = session.queries().await?.len();
    if available > 0 {
        println!(
            "{}",
            formatter.info(&format!(
                "{} test queries loaded. Use 'queries' to list them and 'pick <n>' to search.",
                available
            ))
        );
    }
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map(|b| b.build())
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?;
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = format!("finder (top {})> ", session.top_k());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::SetTopK(top_k)) => {
                        session.set_top_k(top_k);
                        println!(
                            "{}",
                            formatter.success(&format!("Returning top {} results", top_k))
                        );
                    }
                    Ok(ReplCommand::SetUrl(url)) => {
                        session.set_api_url(url);
                        println!(
                            "{}",
                            formatter.success(&format!("Using service at {}", session.api_url()))
                        );
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, config, session, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    SetTopK(TopK),
    SetUrl(String),
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "ask" => parse_ask_command(rest),
        "pick" => parse_pick_command(rest),
        "queries" => Ok(ReplCommand::Command(Command::Queries(QueriesArgs {
            full: rest == "full",
        }))),
        "health" => Ok(ReplCommand::Command(Command::Health(HealthArgs { url: None }))),
        "topk" => rest
            .parse::<TopK>()
            .map(ReplCommand::SetTopK)
            .map_err(CliError::InvalidInput),
        "url" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: url <service-address>".to_string()));
            }
            Ok(ReplCommand::SetUrl(rest.to_string()))
        }
        "extract" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: extract <file>".to_string()));
            }
            Ok(ReplCommand::Command(Command::Extract(ExtractArgs {
                file: PathBuf::from(rest),
                min_length: None,
                csv_only: false,
            })))
        }
        "profile" => parse_profile_command(rest),
        "repl" => Ok(ReplCommand::Command(Command::Repl)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: Command,
    config: &mut Config,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Recommend(args) => commands::execute_recommend(args, session, formatter).await,
        Command::Queries(args) => commands::execute_queries(args, session, formatter).await,
        Command::Health(args) => commands::execute_health(args, session, formatter).await,
        Command::Profile(args) => {
            let switched = matches!(args.action, ProfileAction::Switch { .. });
            commands::execute_profile(args, config, formatter)?;
            if switched {
                session.apply_profile(config)?;
            }
            Ok(())
        }
        Command::Extract(args) => commands::execute_extract(args, formatter).await,
        Command::Repl => Err(CliError::NotPermitted("Already in REPL mode".to_string())),
    }
}

fn recommend_args() -> RecommendArgs {
    RecommendArgs {
        query: None,
        pick: None,
        file: None,
        stdin: false,
        top_k: None,
        url: None,
    }
}

fn parse_ask_command(rest: &str) -> Result<ReplCommand> {
    if rest.is_empty() {
        return Err(CliError::InvalidInput("Usage: ask <job description>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Recommend(RecommendArgs {
        query: Some(rest.to_string()),
        ..recommend_args()
    })))
}

fn parse_pick_command(rest: &str) -> Result<ReplCommand> {
    let number = rest
        .parse::<usize>()
        .map_err(|_| CliError::InvalidInput("Usage: pick <query number>".to_string()))?;

    Ok(ReplCommand::Command(Command::Recommend(RecommendArgs {
        pick: Some(number),
        ..recommend_args()
    })))
}

fn parse_profile_command(rest: &str) -> Result<ReplCommand> {
    let args: Vec<&str> = rest.split_whitespace().collect();
    if args.is_empty() {
        return Ok(ReplCommand::Command(Command::Profile(ProfileArgs {
            action: ProfileAction::Show,
        })));
    }

    let action = match args[0] {
        "list" => ProfileAction::List,
        "show" => ProfileAction::Show,
        "switch" => {
            if args.len() < 2 {
                return Err(CliError::InvalidInput("Usage: profile switch <name>".to_string()));
            }
            ProfileAction::Switch {
                name: args[1].to_string(),
            }
        }
        _ => return Err(CliError::InvalidInput(format!("Unknown profile action: {}", args[0]))),
    };

    Ok(ReplCommand::Command(Command::Profile(ProfileArgs { action })))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let finder_dir = home.join(".finder");
    std::fs::create_dir_all(&finder_dir)?;
    Ok(finder_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  ask <text>                     - Get recommendations for a job description");
    println!("  pick <n>                       - Get recommendations for test query #n");
    println!("  queries [full]                 - List test queries");
    println!("  health                         - Check the recommendation service");
    println!("  topk <n>                       - Set number of results (1-20)");
    println!("  url <address>                  - Set the service address");
    println!("  extract <file>                 - Extract test queries from a local document");
    println!("  profile [list|show|switch]     - Manage profiles");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_keeps_full_text() {
        match parse_repl_command("ask  Java developer,  5 years ").unwrap() {
            ReplCommand::Command(Command::Recommend(args)) => {
                assert_eq!(args.query.as_deref(), Some("Java developer,  5 years"));
            }
            other => panic!("Expected Recommend, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_pick() {
        match parse_repl_command("pick 3").unwrap() {
            ReplCommand::Command(Command::Recommend(args)) => assert_eq!(args.pick, Some(3)),
            other => panic!("Expected Recommend, got {:?}", other),
        }
        assert!(parse_repl_command("pick three").is_err());
    }

    #[test]
    fn test_parse_topk() {
        assert!(matches!(
            parse_repl_command("topk 5").unwrap(),
            ReplCommand::SetTopK(k) if k.get() == 5
        ));
        assert!(parse_repl_command("topk 0").is_err());
        assert!(parse_repl_command("topk 21").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert!(matches!(parse_repl_command("q").unwrap(), ReplCommand::Exit));
        assert!(matches!(parse_repl_command("?").unwrap(), ReplCommand::Help));
        assert!(matches!(
            parse_repl_command("url http://localhost:9000").unwrap(),
            ReplCommand::SetUrl(u) if u == "http://localhost:9000"
        ));
        assert!(parse_repl_command("ask").is_err());
        assert!(parse_repl_command("frobnicate").is_err());
    }

    #[test]
    fn test_parse_profile() {
        assert!(matches!(
            parse_repl_command("profile").unwrap(),
            ReplCommand::Command(Command::Profile(ProfileArgs {
                action: ProfileAction::Show
            }))
        ));
        assert!(parse_repl_command("profile switch").is_err());
    }

    #[test]
    fn test_parse_extract() {
        match parse_repl_command("extract data/test set.csv").unwrap() {
            ReplCommand::Command(Command::Extract(args)) => {
                assert_eq!(args.file, PathBuf::from("data/test set.csv"));
                assert_eq!(args.min_length, None);
                assert!(!args.csv_only);
            }
            other => panic!("Expected Extract, got {:?}", other),
        }
        assert!(parse_repl_command("extract").is_err());
    }

    #[tokio::test]
    async fn test_nested_repl_not_permitted() {
        let cmd = match parse_repl_command("repl").unwrap() {
            ReplCommand::Command(cmd) => cmd,
            other => panic!("Expected Repl, got {:?}", other),
        };

        let mut config = Config::default();
        let mut session = Session::from_config(&config).unwrap();
        let formatter = Formatter::new(crate::config::OutputFormat::Table, false);
        let result = execute_repl_command(cmd, &mut config, &mut session, &formatter).await;
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }
}
