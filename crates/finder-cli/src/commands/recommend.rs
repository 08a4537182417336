//! Recommend command implementation.

use crate::cli::RecommendArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use std::io::Read;

/// Execute the recommend command.
pub async fn execute_recommend(
    args: RecommendArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    let query = resolve_query(&args, session).await?;
    let top_k = args.top_k.unwrap_or_else(|| session.top_k());
    let client = session.client(args.url.as_deref())?;

    let results = client.recommend(&query, top_k).await?;

    println!("{}", formatter.format_recommendations(&results)?);
    Ok(())
}

/// Work out the query text from whichever input the user chose.
async fn resolve_query(args: &RecommendArgs, session: &mut Session) -> Result<String> {
    if let Some(number) = args.pick {
        let queries = session.queries().await?;
        if queries.is_empty() {
            return Err(CliError::InvalidInput(
                "No test queries available. Enter a query manually.".to_string(),
            ));
        }
        return queries
            .get_numbered(number)
            .map(|q| q.to_string())
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Test query #{} does not exist ({} available)",
                    number,
                    queries.len()
                ))
            });
    }

    let text = if let Some(query) = &args.query {
        query.clone()
    } else if let Some(path) = &args.file {
        std::fs::read_to_string(path)?
    } else if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(CliError::InvalidInput(
            "Provide a query, --pick <n>, --file <path> or --stdin".to_string(),
        ));
    };

    validate_query(&text)
}

/// Trim the query and reject blank input.
pub(crate) fn validate_query(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("Query must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
