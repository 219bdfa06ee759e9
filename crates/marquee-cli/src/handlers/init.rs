use anyhow::Result;
use std::path::Path;

use marquee_engine::summarize;
use marquee_runtime::Workspace;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(
    workspace: &Workspace,
    catalog_path: &Path,
    share_header: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let catalog = workspace.init(catalog_path, share_header)?;
    let summary = summarize(&catalog);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("Workspace ready at {}", workspace.data_dir().display());
            println!(
                "Catalog: {} films, {} screenings ({} cancelled, {} industry-only)",
                summary.film_count,
                summary.screening_count,
                summary.cancelled_count,
                summary.industry_count
            );
            if let Some(span) = &summary.span {
                println!(
                    "Festival days: {} to {} ({} days)",
                    output::format_day(span.first_day),
                    output::format_day(span.last_day),
                    span.day_count
                );
            }
            println!();
            println!("Next: marquee timetable");
        }
    }

    Ok(())
}
