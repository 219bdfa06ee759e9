use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use marquee_runtime::{Facets, Planner};

use crate::output::{self, timetable};
use crate::types::OutputFormat;

#[derive(Serialize)]
struct DayGroup<'a> {
    day: NaiveDate,
    screenings: Vec<TimetableRow<'a>>,
}

#[derive(Serialize)]
struct TimetableRow<'a> {
    film_id: &'a str,
    screening_id: &'a str,
    title: &'a str,
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    venue: &'a str,
    room: Option<&'a str>,
    left: f64,
    width: f64,
    favorite: bool,
    selected: bool,
    industry: bool,
}

pub fn handle(
    planner: &Planner,
    facets: Facets,
    day: Option<NaiveDate>,
    format: &OutputFormat,
) -> Result<()> {
    let mut days = planner.timetable(facets);
    if let Some(day) = day {
        days.retain(|key, _| *key == day);
    }

    match format {
        OutputFormat::Json => {
            let groups: Vec<DayGroup> = days
                .iter()
                .map(|(day, entries)| DayGroup {
                    day: *day,
                    screenings: entries
                        .iter()
                        .map(|placed| TimetableRow {
                            film_id: placed.film.id.as_str(),
                            screening_id: placed.screening.id.as_str(),
                            title: &placed.film.title,
                            start_time: placed.screening.start_time,
                            end_time: placed.screening.end_time,
                            venue: placed.screening.venue.label(),
                            room: placed.screening.venue.room.as_deref(),
                            left: placed.slot.left,
                            width: placed.slot.width,
                            favorite: planner.is_favorite(&placed.film.id),
                            selected: planner.is_selected(&placed.screening.id),
                            industry: placed.screening.is_industry_restricted(),
                        })
                        .collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        OutputFormat::Plain => {
            timetable::print_timetable(&days, planner, output::stdout_is_terminal());
        }
    }

    Ok(())
}
