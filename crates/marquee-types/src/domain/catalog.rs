use serde::{Deserialize, Serialize};

use super::film::{Film, Screening};
use super::ids::{FilmId, ScreeningId};

/// The full festival programme: a read-only, load-time snapshot.
///
/// The catalog is the single source of truth for films and screenings.
/// Nothing in marquee mutates it after load; persisted state (shortlist,
/// selections) refers to it by id only, so a catalog refresh between
/// sessions is safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<Film>,
}

impl Catalog {
    pub fn new(items: Vec<Film>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn film_count(&self) -> usize {
        self.items.len()
    }

    /// Look up a film by id. Linear scan: catalogs are bounded by a single
    /// festival's programme (a few hundred titles).
    pub fn film(&self, id: &FilmId) -> Option<&Film> {
        self.items.iter().find(|f| &f.id == id)
    }

    /// Look up a screening (and its owning film) by screening id.
    pub fn screening(&self, id: &ScreeningId) -> Option<(&Film, &Screening)> {
        self.items.iter().find_map(|film| {
            film.schedule_items
                .iter()
                .find(|s| &s.id == id)
                .map(|s| (film, s))
        })
    }

    /// All (film, screening) pairs in catalog order.
    pub fn screenings(&self) -> impl Iterator<Item = (&Film, &Screening)> {
        self.items
            .iter()
            .flat_map(|film| film.schedule_items.iter().map(move |s| (film, s)))
    }

    /// Distinct programme strands, in first-seen catalog order.
    pub fn programmes(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for film in &self.items {
            for programme in &film.web_programmes {
                if !seen.contains(&programme.as_str()) {
                    seen.push(programme.as_str());
                }
            }
        }
        seen
    }
}
