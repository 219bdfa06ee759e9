use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;

use marquee_runtime::{Planner, render_share_text, write_share_csv};
use marquee_types::FilmId;

use crate::types::{ExportFormat, OutputFormat};

#[derive(Serialize)]
struct ShortlistRow<'a> {
    rank: usize,
    film_id: &'a str,
    title: &'a str,
    directors: &'a [String],
}

pub fn handle_list(planner: &Planner, format: &OutputFormat) -> Result<()> {
    let films = planner.ranked_films();

    match format {
        OutputFormat::Json => {
            let rows: Vec<ShortlistRow> = films
                .iter()
                .enumerate()
                .map(|(index, film)| ShortlistRow {
                    rank: index + 1,
                    film_id: film.id.as_str(),
                    title: &film.title,
                    directors: &film.directors,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            if films.is_empty() {
                println!("No favorites yet. Add one with: marquee favorite toggle <film-id>");
                return Ok(());
            }

            for (index, film) in films.iter().enumerate() {
                let note = if index == 0 { "  (top pick)" } else { "" };
                if film.directors.is_empty() {
                    println!("{}. {}{}", index + 1, film.title, note);
                } else {
                    println!(
                        "{}. {} ({}){}",
                        index + 1,
                        film.title,
                        film.directors.join(", "),
                        note
                    );
                }
            }
        }
    }

    Ok(())
}

pub fn handle_toggle(planner: &mut Planner, film_id: &str, format: &OutputFormat) -> Result<()> {
    let id = FilmId::from(film_id);
    let Some(film) = planner.catalog().film(&id) else {
        bail!("no film with id '{}' in the catalog", film_id);
    };
    let title = film.title.clone();

    let favorite = planner.toggle_favorite(&id);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "film_id": film_id, "favorite": favorite })
            );
        }
        OutputFormat::Plain => {
            if favorite {
                println!(
                    "Added '{}' to favorites (rank {})",
                    title,
                    planner.favorites().len()
                );
            } else {
                println!("Removed '{}' from favorites", title);
            }
        }
    }

    Ok(())
}

pub fn handle_move(
    planner: &mut Planner,
    source_film_id: &str,
    dest_film_id: &str,
    format: &OutputFormat,
) -> Result<()> {
    let source = FilmId::from(source_film_id);
    let dest = FilmId::from(dest_film_id);

    let before: Vec<FilmId> = planner.favorites().to_vec();
    planner.reorder_favorites(&source, &dest);

    if *format == OutputFormat::Plain && planner.favorites() == before.as_slice() {
        // Degenerate move (same id, or an id not on the shortlist): defined
        // as a no-op, not an error.
        println!("Shortlist unchanged");
    }

    handle_list(planner, format)
}

pub fn handle_export(
    planner: &Planner,
    format: ExportFormat,
    output: Option<&Path>,
    share_header: Option<&str>,
) -> Result<()> {
    let films = planner.ranked_films();

    match format {
        ExportFormat::Text => {
            let text = render_share_text(&films, share_header);
            match output {
                Some(path) => std::fs::write(path, text)?,
                None => print!("{}", text),
            }
        }
        ExportFormat::Csv => match output {
            Some(path) => {
                let file = std::fs::File::create(path)?;
                write_share_csv(&films, file)?;
            }
            None => {
                let stdout = std::io::stdout();
                write_share_csv(&films, stdout.lock())?;
            }
        },
    }

    Ok(())
}
