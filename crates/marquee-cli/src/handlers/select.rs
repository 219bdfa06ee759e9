use anyhow::{Result, bail};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use marquee_runtime::Planner;
use marquee_types::{Film, Screening, ScreeningId};

use crate::output;
use crate::types::OutputFormat;

#[derive(Serialize)]
struct SelectionRow<'a> {
    screening_id: &'a str,
    film_id: &'a str,
    title: &'a str,
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    venue: &'a str,
}

pub fn handle_list(planner: &Planner, format: &OutputFormat) -> Result<()> {
    // Stale selection ids (from an older catalog) drop out of this view;
    // the stored set keeps them.
    let mut selected: Vec<(&Film, &Screening)> = planner
        .selections()
        .iter()
        .filter_map(|id| planner.catalog().screening(id))
        .collect();
    selected.sort_by_key(|(_, screening)| (screening.start_time, screening.id.as_str().to_string()));

    match format {
        OutputFormat::Json => {
            let rows: Vec<SelectionRow> = selected
                .iter()
                .map(|(film, screening)| SelectionRow {
                    screening_id: screening.id.as_str(),
                    film_id: film.id.as_str(),
                    title: &film.title,
                    start_time: screening.start_time,
                    end_time: screening.end_time,
                    venue: screening.venue.label(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            if selected.is_empty() {
                println!("No screenings selected. Pick one with: marquee select toggle <screening-id>");
                return Ok(());
            }

            for (film, screening) in &selected {
                println!(
                    "{}  {} - {}  {} @ {}  [{}]",
                    output::format_day(screening.start_time.date_naive()),
                    output::format_clock(&screening.start_time),
                    output::format_clock(&screening.end_time),
                    film.title,
                    screening.venue.label(),
                    screening.id
                );
            }
        }
    }

    Ok(())
}

pub fn handle_toggle(
    planner: &mut Planner,
    screening_id: &str,
    format: &OutputFormat,
) -> Result<()> {
    let id = ScreeningId::from(screening_id);
    let Some((film, screening)) = planner.catalog().screening(&id) else {
        bail!("no screening with id '{}' in the catalog", screening_id);
    };
    let title = film.title.clone();
    let when = format!(
        "{} {}",
        output::format_day(screening.start_time.date_naive()),
        output::format_clock(&screening.start_time)
    );
    let venue = screening.venue.label().to_string();

    let selected = planner.toggle_selection(&id);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "screening_id": screening_id, "selected": selected })
            );
        }
        OutputFormat::Plain => {
            if selected {
                println!("Selected '{}' - {} @ {}", title, when, venue);
            } else {
                println!("Unselected '{}' - {} @ {}", title, when, venue);
            }
        }
    }

    Ok(())
}
