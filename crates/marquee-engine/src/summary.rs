use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_types::Catalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub film_count: usize,
    pub screening_count: usize,
    pub cancelled_count: usize,
    pub industry_count: usize,
    pub span: Option<FestivalSpan>,
}

/// First and last calendar day with at least one screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalSpan {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub day_count: i64,
}

pub fn summarize(catalog: &Catalog) -> CatalogSummary {
    let mut screening_count = 0;
    let mut cancelled_count = 0;
    let mut industry_count = 0;
    let mut first_day: Option<NaiveDate> = None;
    let mut last_day: Option<NaiveDate> = None;

    for (_, screening) in catalog.screenings() {
        screening_count += 1;
        if screening.cancelled {
            cancelled_count += 1;
        }
        if screening.is_industry_restricted() {
            industry_count += 1;
        }

        let day = screening.start_time.date_naive();
        first_day = Some(first_day.map_or(day, |d| d.min(day)));
        last_day = Some(last_day.map_or(day, |d| d.max(day)));
    }

    let span = match (first_day, last_day) {
        (Some(first), Some(last)) => Some(FestivalSpan {
            first_day: first,
            last_day: last,
            day_count: (last - first).num_days() + 1,
        }),
        _ => None,
    };

    CatalogSummary {
        film_count: catalog.film_count(),
        screening_count,
        cancelled_count,
        industry_count,
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use marquee_types::{Film, FilmId, Screening, ScreeningId, Venue};

    fn screening(id: &str, start: &str, end: &str, cancelled: bool, industry: bool) -> Screening {
        Screening {
            id: ScreeningId::from(id),
            start_time: DateTime::parse_from_rfc3339(start).unwrap(),
            end_time: DateTime::parse_from_rfc3339(end).unwrap(),
            venue: Venue {
                name: "Grand Palace Theatre".to_string(),
                short_name: String::new(),
                room: None,
            },
            cancelled,
            industry,
            press_and_industry: false,
            cost: Vec::new(),
        }
    }

    #[test]
    fn test_summarize_empty_catalog() {
        let summary = summarize(&Catalog::default());
        assert_eq!(summary.film_count, 0);
        assert_eq!(summary.screening_count, 0);
        assert!(summary.span.is_none());
    }

    #[test]
    fn test_summarize_counts_and_span() {
        let film = Film {
            id: FilmId::from("a"),
            title: "Alpha".to_string(),
            description: String::new(),
            directors: Vec::new(),
            languages: String::new(),
            countries: String::new(),
            genre: Vec::new(),
            interests: Vec::new(),
            web_programmes: Vec::new(),
            schedule_items: vec![
                screening(
                    "s1",
                    "2025-09-10T19:00:00-04:00",
                    "2025-09-10T21:00:00-04:00",
                    false,
                    false,
                ),
                screening(
                    "s2",
                    "2025-09-13T10:00:00-04:00",
                    "2025-09-13T12:00:00-04:00",
                    true,
                    true,
                ),
            ],
        };

        let summary = summarize(&Catalog::new(vec![film]));
        assert_eq!(summary.film_count, 1);
        assert_eq!(summary.screening_count, 2);
        assert_eq!(summary.cancelled_count, 1);
        assert_eq!(summary.industry_count, 1);

        let span = summary.span.unwrap();
        assert_eq!(span.first_day, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
        assert_eq!(span.last_day, NaiveDate::from_ymd_opt(2025, 9, 13).unwrap());
        assert_eq!(span.day_count, 4);
    }
}
