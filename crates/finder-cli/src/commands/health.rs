//! Health command implementation.

use crate::cli::HealthArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the health command.
pub async fn execute_health(args: HealthArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let client = session.client(args.url.as_deref())?;
    let health = client.health().await?;
    println!("{}", formatter.format_health(client.base_url(), &health)?);
    Ok(())
}
