use std::collections::HashSet;

use marquee_types::{Catalog, Film, FilmId, Screening, ScreeningId};

/// UI-chosen facet flags plus the membership sets they test against.
///
/// All fields are read-only borrows; the pipeline is a pure function of the
/// catalog and these parameters.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams<'a> {
    /// Skip films whose id is not on the shortlist.
    pub favorites_only: bool,
    /// Drop industry and press & industry screenings.
    pub hide_industry: bool,
    /// Keep only screenings the user has selected.
    pub selected_only: bool,
    pub favorites: &'a [FilmId],
    pub selections: &'a HashSet<ScreeningId>,
}

/// A (film, screening) pair that survived the filter pipeline.
///
/// Ephemeral: recomputed on every parameter change, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct VisibleEntry<'a> {
    pub film: &'a Film,
    pub screening: &'a Screening,
}

/// Select the visible subset of screenings for the given parameters.
///
/// Result order follows catalog film order, then each film's internal
/// screening order. Cancelled screenings never pass, regardless of flags.
/// A film with zero qualifying screenings simply contributes nothing.
pub fn select_visible<'a>(catalog: &'a Catalog, params: &FilterParams<'_>) -> Vec<VisibleEntry<'a>> {
    let mut visible = Vec::new();

    for film in &catalog.items {
        if params.favorites_only && !params.favorites.contains(&film.id) {
            continue;
        }

        for screening in &film.schedule_items {
            if screening.cancelled {
                continue;
            }
            if params.selected_only && !params.selections.contains(&screening.id) {
                continue;
            }
            if params.hide_industry && screening.is_industry_restricted() {
                continue;
            }
            visible.push(VisibleEntry { film, screening });
        }
    }

    visible
}

/// Case-insensitive substring match over title and description.
///
/// An empty query matches every film.
pub fn film_matches(film: &Film, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    film.title.to_lowercase().contains(&query) || film.description.to_lowercase().contains(&query)
}
