use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use marquee_engine::{FilterParams, PlacedEntry, VisibleEntry, selection, shortlist};
use marquee_store::Database;
use marquee_types::{Catalog, Film, FilmId, ScreeningId};

use crate::Result;

/// The three facet flags the UI can set on the filter pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Facets {
    pub favorites_only: bool,
    pub hide_industry: bool,
    pub selected_only: bool,
}

/// The running planning session.
///
/// Owns the catalog snapshot, the ranked shortlist, and the selection set.
/// Both persisted collections are read once when the session opens; every
/// mutating command updates memory first and then writes the full collection
/// through to storage. Storage is best effort (a failed write does not roll
/// back the in-memory state, which stays authoritative for the session).
///
/// Derived views are recomputed from scratch on every call. Catalogs are
/// bounded by a single festival's programme, so there is nothing to cache.
#[derive(Debug)]
pub struct Planner {
    catalog: Catalog,
    favorites: Vec<FilmId>,
    selections: HashSet<ScreeningId>,
    db: Database,
}

impl Planner {
    pub fn open(catalog: Catalog, db: Database) -> Result<Self> {
        let favorites = db.load_favorites()?;
        let selections = db.load_selections()?;

        Ok(Self {
            catalog,
            favorites,
            selections,
            db,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &[FilmId] {
        &self.favorites
    }

    pub fn selections(&self) -> &HashSet<ScreeningId> {
        &self.selections
    }

    pub fn is_favorite(&self, id: &FilmId) -> bool {
        self.favorites.contains(id)
    }

    pub fn is_selected(&self, id: &ScreeningId) -> bool {
        self.selections.contains(id)
    }

    /// Toggle a film on the shortlist. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &FilmId) -> bool {
        self.favorites = shortlist::toggle(&self.favorites, id);
        let _ = self.db.save_favorites(&self.favorites);
        self.favorites.contains(id)
    }

    /// Move `source` to `dest`'s position on the shortlist.
    ///
    /// Degenerate moves (same id, unknown id) leave the order unchanged and
    /// skip the storage write.
    pub fn reorder_favorites(&mut self, source: &FilmId, dest: &FilmId) {
        let next = shortlist::reorder(&self.favorites, source, dest);
        if next != self.favorites {
            self.favorites = next;
            let _ = self.db.save_favorites(&self.favorites);
        }
    }

    /// Toggle a screening selection. Returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: &ScreeningId) -> bool {
        self.selections = selection::toggle(&self.selections, id);
        let _ = self.db.save_selections(&self.selections);
        self.selections.contains(id)
    }

    /// The shortlist resolved against the catalog, in rank order.
    /// Stale ids drop out of this view without touching the stored list.
    pub fn ranked_films(&self) -> Vec<&Film> {
        shortlist::ranked_films(&self.favorites, &self.catalog)
    }

    /// Visible screenings for the given facet flags.
    pub fn visible(&self, facets: Facets) -> Vec<VisibleEntry<'_>> {
        marquee_engine::select_visible(
            &self.catalog,
            &FilterParams {
                favorites_only: facets.favorites_only,
                hide_industry: facets.hide_industry,
                selected_only: facets.selected_only,
                favorites: &self.favorites,
                selections: &self.selections,
            },
        )
    }

    /// Visible screenings placed on the daily axis, grouped by calendar day.
    pub fn timetable(&self, facets: Facets) -> BTreeMap<NaiveDate, Vec<PlacedEntry<'_>>> {
        marquee_engine::layout(&self.visible(facets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": "film-a",
                        "title": "Alpha",
                        "scheduleItems": [
                            {
                                "id": "scr-a1",
                                "startTime": "2025-09-10T19:00:00-04:00",
                                "endTime": "2025-09-10T21:00:00-04:00",
                                "venue": { "name": "Grand Palace Theatre" }
                            },
                            {
                                "id": "scr-a2",
                                "startTime": "2025-09-11T10:00:00-04:00",
                                "endTime": "2025-09-11T12:00:00-04:00",
                                "venue": { "name": "Grand Palace Theatre" },
                                "industry": true
                            }
                        ]
                    },
                    {
                        "id": "film-b",
                        "title": "Beta",
                        "scheduleItems": [
                            {
                                "id": "scr-b1",
                                "startTime": "2025-09-10T13:00:00-04:00",
                                "endTime": "2025-09-10T15:00:00-04:00",
                                "venue": { "name": "Harbourfront Cinema" }
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn open_planner() -> Planner {
        Planner::open(sample_catalog(), Database::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_fresh_session_has_empty_state() {
        let planner = open_planner();
        assert!(planner.favorites().is_empty());
        assert!(planner.selections().is_empty());
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let mut planner = open_planner();
        let id = FilmId::from("film-a");

        assert!(planner.toggle_favorite(&id));
        assert!(planner.is_favorite(&id));

        assert!(!planner.toggle_favorite(&id));
        assert!(!planner.is_favorite(&id));
    }

    #[test]
    fn test_reorder_favorites_moves_rank() {
        let mut planner = open_planner();
        planner.toggle_favorite(&FilmId::from("film-a"));
        planner.toggle_favorite(&FilmId::from("film-b"));

        planner.reorder_favorites(&FilmId::from("film-b"), &FilmId::from("film-a"));
        assert_eq!(
            planner.favorites(),
            &[FilmId::from("film-b"), FilmId::from("film-a")]
        );

        // Unknown source: no-op.
        planner.reorder_favorites(&FilmId::from("missing"), &FilmId::from("film-a"));
        assert_eq!(
            planner.favorites(),
            &[FilmId::from("film-b"), FilmId::from("film-a")]
        );
    }

    #[test]
    fn test_state_written_through_to_storage() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("marquee.db");

        {
            let db = Database::open(&db_path).unwrap();
            let mut planner = Planner::open(sample_catalog(), db).unwrap();
            planner.toggle_favorite(&FilmId::from("film-b"));
            planner.toggle_favorite(&FilmId::from("film-a"));
            planner.toggle_selection(&ScreeningId::from("scr-b1"));
        }

        let db = Database::open(&db_path).unwrap();
        let planner = Planner::open(sample_catalog(), db).unwrap();
        assert_eq!(
            planner.favorites(),
            &[FilmId::from("film-b"), FilmId::from("film-a")]
        );
        assert!(planner.is_selected(&ScreeningId::from("scr-b1")));
    }

    #[test]
    fn test_ranked_films_skips_stale_ids() {
        let mut planner = open_planner();
        planner.toggle_favorite(&FilmId::from("gone-film"));
        planner.toggle_favorite(&FilmId::from("film-a"));

        let titles: Vec<&str> = planner.ranked_films().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha"]);

        // The stale id stays on the stored shortlist.
        assert!(planner.favorites().contains(&FilmId::from("gone-film")));
    }

    #[test]
    fn test_visible_and_timetable_respect_facets() {
        let mut planner = open_planner();
        planner.toggle_selection(&ScreeningId::from("scr-a1"));

        let all = planner.visible(Facets::default());
        assert_eq!(all.len(), 3);

        let no_industry = planner.visible(Facets {
            hide_industry: true,
            ..Facets::default()
        });
        assert_eq!(no_industry.len(), 2);

        let selected = planner.visible(Facets {
            selected_only: true,
            ..Facets::default()
        });
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].screening.id.as_str(), "scr-a1");

        let days = planner.timetable(Facets::default());
        assert_eq!(days.len(), 2);
        let first_day = days.values().next().unwrap();
        // Sorted by start time within the day.
        assert_eq!(first_day[0].screening.id.as_str(), "scr-b1");
        assert_eq!(first_day[1].screening.id.as_str(), "scr-a1");
    }
}
