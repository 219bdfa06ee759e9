use std::io::Write;

use marquee_types::Film;

use crate::Result;

/// Header used when the config does not set one.
pub const DEFAULT_SHARE_HEADER: &str = "My festival picks:";

/// Render the ranked shortlist as shareable plain text.
///
/// One numbered line per film, directors in parentheses when known. The
/// caller decides where the text goes (stdout, a file, a paste buffer).
pub fn render_share_text(films: &[&Film], header: Option<&str>) -> String {
    let mut out = String::from(header.unwrap_or(DEFAULT_SHARE_HEADER));
    out.push('\n');

    for (index, film) in films.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {}", index + 1, film.title));
        if !film.directors.is_empty() {
            out.push_str(&format!(" ({})", film.directors.join(", ")));
        }
    }
    out.push('\n');

    out
}

/// Write the ranked shortlist as CSV: rank, film id, title, directors.
pub fn write_share_csv<W: Write>(films: &[&Film], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["rank", "film_id", "title", "directors"])?;

    for (index, film) in films.iter().enumerate() {
        csv_writer.write_record([
            (index + 1).to_string().as_str(),
            film.id.as_str(),
            film.title.as_str(),
            film.directors.join(", ").as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
