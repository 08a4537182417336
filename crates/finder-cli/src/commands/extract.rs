//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use finder_domain::{DocumentSource, QueryList};
use finder_extractor::{ExtractionStrategy, Extractor, ExtractorConfig, FsSource};
use tracing::debug;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let extractor = build_extractor(&args)?;

    let location = args.file.display().to_string();
    let document = match FsSource::new().load(&location).await {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("{}", e);
            None
        }
    };

    let queries: QueryList = extractor.extract(document.as_deref());
    println!("{}", formatter.format_queries(&queries, true)?);
    Ok(())
}

fn build_extractor(args: &ExtractArgs) -> Result<Extractor> {
    let mut config = ExtractorConfig::default();
    if let Some(min_length) = args.min_length {
        config.min_query_length = min_length;
    }
    if args.csv_only {
        config.strategies = vec![ExtractionStrategy::Delimited];
    }
    Ok(Extractor::new(config)?)
}
