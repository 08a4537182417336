//! Queries command implementation.

use crate::cli::QueriesArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the queries command.
pub async fn execute_queries(
    args: QueriesArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    let queries = session.queries().await?;
    println!("{}", formatter.format_queries(queries, args.full)?);
    Ok(())
}
