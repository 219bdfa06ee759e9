use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::ids::{FilmId, ScreeningId};

/// Where a screening takes place.
///
/// `short_name` and `room` are frequently empty in catalog exports;
/// presentation layers fall back to `name` when `short_name` is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub room: Option<String>,
}

impl Venue {
    /// Display label: short name if the catalog provides one, else full name.
    pub fn label(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}

/// One scheduled showing of a film.
///
/// Timestamps are kept in the offset the catalog export carries
/// ([`DateTime<FixedOffset>`]), so a screening's wall-clock hour and minute
/// survive untouched regardless of the machine's local timezone. The layout
/// engine depends on that: placement on the daily axis is computed from the
/// venue-local wall clock, never from a converted instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: ScreeningId,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub venue: Venue,
    /// Cancelled screenings are never shown, regardless of other filters.
    #[serde(default)]
    pub cancelled: bool,
    /// Industry-accreditation-only screening.
    #[serde(default)]
    pub industry: bool,
    /// Press & industry screening.
    #[serde(default)]
    pub press_and_industry: bool,
    /// Cost labels as printed in the programme (e.g. "Premium", "Free").
    #[serde(default)]
    pub cost: Vec<String>,
}

impl Screening {
    /// True when the screening is restricted to industry or press badges.
    pub fn is_industry_restricted(&self) -> bool {
        self.industry || self.press_and_industry
    }
}

/// A film in the festival catalog, with its screenings embedded.
///
/// Immutable for the lifetime of a session; owned by the [`Catalog`].
///
/// [`Catalog`]: super::Catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub countries: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Programme strands the festival files this film under.
    #[serde(default)]
    pub web_programmes: Vec<String>,
    /// Scheduled showings, in catalog order. Empty for catalogue-only titles.
    #[serde(default)]
    pub schedule_items: Vec<Screening>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_parses_catalog_export_shape() {
        let json = r#"{
            "id": "scr-1",
            "startTime": "2025-09-10T19:00:00-04:00",
            "endTime": "2025-09-10T21:15:00-04:00",
            "venue": { "name": "Grand Palace Theatre", "shortName": "Grand Palace", "room": "Cinema 1" },
            "pressAndIndustry": true,
            "cost": ["Premium"]
        }"#;

        let screening: Screening = serde_json::from_str(json).unwrap();
        assert_eq!(screening.id.as_str(), "scr-1");
        assert_eq!(screening.venue.label(), "Grand Palace");
        assert!(!screening.cancelled);
        assert!(!screening.industry);
        assert!(screening.press_and_industry);
        assert!(screening.is_industry_restricted());
    }

    #[test]
    fn test_screening_keeps_wall_clock_hour() {
        let json = r#"{
            "id": "scr-2",
            "startTime": "2025-09-10T23:30:00-04:00",
            "endTime": "2025-09-11T00:45:00-04:00",
            "venue": { "name": "Harbourfront Cinema" }
        }"#;

        let screening: Screening = serde_json::from_str(json).unwrap();
        use chrono::Timelike;
        assert_eq!(screening.start_time.hour(), 23);
        assert_eq!(screening.end_time.hour(), 0);
        assert_eq!(screening.end_time.minute(), 45);
    }

    #[test]
    fn test_film_defaults_for_missing_fields() {
        let json = r#"{ "id": "film-1", "title": "The Long Night" }"#;

        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.title, "The Long Night");
        assert!(film.directors.is_empty());
        assert!(film.schedule_items.is_empty());
    }

    #[test]
    fn test_venue_label_falls_back_to_name() {
        let venue = Venue {
            name: "Civic Lightbox".to_string(),
            short_name: String::new(),
            room: None,
        };
        assert_eq!(venue.label(), "Civic Lightbox");
    }
}
