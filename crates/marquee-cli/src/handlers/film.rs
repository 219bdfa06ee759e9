use anyhow::{Result, bail};
use serde::Serialize;

use marquee_engine::film_matches;
use marquee_runtime::Planner;
use marquee_types::{Film, FilmId};

use crate::output::{self, films};
use crate::types::OutputFormat;

#[derive(Serialize)]
struct FilmRow<'a> {
    id: &'a str,
    title: &'a str,
    directors: &'a [String],
    programmes: &'a [String],
    favorite: bool,
    screening_count: usize,
}

pub fn handle_list(
    planner: &Planner,
    query: Option<&str>,
    programme: Option<&str>,
    favorites_only: bool,
    format: &OutputFormat,
) -> Result<()> {
    let films: Vec<&Film> = planner
        .catalog()
        .items
        .iter()
        .filter(|film| {
            film_matches(film, query.unwrap_or(""))
                && programme.is_none_or(|p| film.web_programmes.iter().any(|wp| wp == p))
                && (!favorites_only || planner.is_favorite(&film.id))
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let rows: Vec<FilmRow> = films
                .iter()
                .map(|film| FilmRow {
                    id: film.id.as_str(),
                    title: &film.title,
                    directors: &film.directors,
                    programmes: &film.web_programmes,
                    favorite: planner.is_favorite(&film.id),
                    screening_count: film.schedule_items.len(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            films::print_film_list(&films, planner, output::stdout_is_terminal());
        }
    }

    Ok(())
}

pub fn handle_show(planner: &Planner, film_id: &str, format: &OutputFormat) -> Result<()> {
    let id = FilmId::from(film_id);
    let Some(film) = planner.catalog().film(&id) else {
        bail!("no film with id '{}' in the catalog", film_id);
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(film)?);
        }
        OutputFormat::Plain => {
            films::print_film_details(film, planner, output::stdout_is_terminal());
        }
    }

    Ok(())
}
