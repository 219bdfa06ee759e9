use owo_colors::OwoColorize;

use marquee_runtime::Planner;
use marquee_types::Film;

use crate::output;

pub fn print_film_list(films: &[&Film], planner: &Planner, enable_color: bool) {
    if films.is_empty() {
        let msg = "No films match the current search";
        if enable_color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    for film in films {
        let marker = if planner.is_favorite(&film.id) {
            "*"
        } else {
            " "
        };

        let mut line = format!("{} {}", marker, film.title);
        if !film.directors.is_empty() {
            line.push_str(&format!(" - {}", film.directors.join(", ")));
        }
        if !film.web_programmes.is_empty() {
            line.push_str(&format!(" [{}]", film.web_programmes.join(", ")));
        }

        if enable_color {
            println!("{}", line);
            println!(
                "    {}",
                format!(
                    "{} · {} screening{}",
                    film.id,
                    film.schedule_items.len(),
                    if film.schedule_items.len() == 1 { "" } else { "s" }
                )
                .bright_black()
            );
        } else {
            println!("{}", line);
            println!(
                "    {} · {} screening{}",
                film.id,
                film.schedule_items.len(),
                if film.schedule_items.len() == 1 { "" } else { "s" }
            );
        }
    }

    println!();
    let footer = format!(
        "Showing {} of {} films",
        films.len(),
        planner.catalog().film_count()
    );
    if enable_color {
        println!("{}", footer.bright_black());
    } else {
        println!("{}", footer);
    }
}

pub fn print_film_details(film: &Film, planner: &Planner, enable_color: bool) {
    if enable_color {
        println!("{}", film.title.bold());
    } else {
        println!("{}", film.title);
    }
    println!("  id: {}", film.id);

    if !film.directors.is_empty() {
        println!("  directors: {}", film.directors.join(", "));
    }
    if !film.languages.is_empty() {
        println!("  languages: {}", film.languages);
    }
    if !film.countries.is_empty() {
        println!("  countries: {}", film.countries);
    }
    if !film.genre.is_empty() {
        println!("  genre: {}", film.genre.join(", "));
    }
    if !film.web_programmes.is_empty() {
        println!("  programmes: {}", film.web_programmes.join(", "));
    }
    if !film.description.is_empty() {
        println!();
        println!("  {}", film.description);
    }

    if film.schedule_items.is_empty() {
        return;
    }

    println!();
    println!("Screenings:");
    for screening in &film.schedule_items {
        let mut notes = Vec::new();
        if screening.cancelled {
            notes.push("cancelled");
        }
        if screening.is_industry_restricted() {
            notes.push("industry");
        }
        if planner.is_selected(&screening.id) {
            notes.push("selected");
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!("  ({})", notes.join(", "))
        };

        let line = format!(
            "  {}  {} - {}  {}  [{}]{}",
            output::format_day(screening.start_time.date_naive()),
            output::format_clock(&screening.start_time),
            output::format_clock(&screening.end_time),
            screening.venue.label(),
            screening.id,
            notes
        );

        if enable_color && screening.cancelled {
            println!("{}", line.bright_black());
        } else {
            println!("{}", line);
        }
    }
}
