//! Sample programme data for integration tests.
//!
//! One small catalog that covers the interesting layout and filter cases:
//! a screening crossing midnight, a cancelled screening, industry and
//! press & industry restrictions, and a film with no screenings at all.

/// Festival programme JSON in the catalog export shape.
pub fn sample_catalog_json() -> &'static str {
    r#"{
  "filters": {
    "webProgrammes": ["Gala", "Documentary", "Late Night"]
  },
  "items": [
    {
      "id": "northern-alpha",
      "title": "Northern Alpha",
      "description": "A slow-burn mystery set above the treeline.",
      "directors": ["R. Kowalczyk"],
      "languages": "English, Polish",
      "countries": "Canada, Poland",
      "genre": ["Drama", "Mystery"],
      "webProgrammes": ["Gala"],
      "scheduleItems": [
        {
          "id": "alpha-opening",
          "startTime": "2025-09-10T19:00:00-04:00",
          "endTime": "2025-09-10T21:15:00-04:00",
          "venue": { "name": "Grand Palace Theatre", "shortName": "Grand Palace", "room": "Cinema 1" },
          "cost": ["Premium"]
        },
        {
          "id": "alpha-press",
          "startTime": "2025-09-11T09:00:00-04:00",
          "endTime": "2025-09-11T11:00:00-04:00",
          "venue": { "name": "Grand Palace Theatre", "shortName": "Grand Palace", "room": "Cinema 3" },
          "industry": true
        },
        {
          "id": "alpha-cancelled",
          "startTime": "2025-09-12T18:00:00-04:00",
          "endTime": "2025-09-12T20:00:00-04:00",
          "venue": { "name": "Harbourfront Cinema" },
          "cancelled": true
        }
      ]
    },
    {
      "id": "harbour-lights",
      "title": "Harbour Lights",
      "description": "Portrait of a night shift at the ferry docks.",
      "directors": ["M. Osei", "T. Laurent"],
      "languages": "French",
      "countries": "France",
      "genre": ["Documentary"],
      "webProgrammes": ["Documentary"],
      "scheduleItems": [
        {
          "id": "harbour-matinee",
          "startTime": "2025-09-10T13:00:00-04:00",
          "endTime": "2025-09-10T15:00:00-04:00",
          "venue": { "name": "Harbourfront Cinema", "shortName": "Harbourfront" }
        },
        {
          "id": "harbour-press",
          "startTime": "2025-09-10T09:30:00-04:00",
          "endTime": "2025-09-10T11:30:00-04:00",
          "venue": { "name": "Harbourfront Cinema", "shortName": "Harbourfront" },
          "pressAndIndustry": true
        }
      ]
    },
    {
      "id": "midnight-run-club",
      "title": "Midnight Run Club",
      "description": "Anthology horror for the late crowd.",
      "directors": ["S. Ito"],
      "languages": "Japanese",
      "countries": "Japan",
      "genre": ["Horror"],
      "webProgrammes": ["Late Night"],
      "scheduleItems": [
        {
          "id": "midnight-late",
          "startTime": "2025-09-10T23:30:00-04:00",
          "endTime": "2025-09-11T00:45:00-04:00",
          "venue": { "name": "Civic Lightbox", "shortName": "Lightbox" }
        },
        {
          "id": "midnight-encore",
          "startTime": "2025-09-11T14:00:00-04:00",
          "endTime": "2025-09-11T15:15:00-04:00",
          "venue": { "name": "Civic Lightbox", "shortName": "Lightbox" }
        }
      ]
    },
    {
      "id": "paper-lanterns",
      "title": "Paper Lanterns",
      "description": "Archive footage essay, screening dates to be announced.",
      "directors": [],
      "languages": "Mandarin",
      "countries": "Taiwan",
      "genre": ["Documentary"],
      "webProgrammes": ["Documentary"],
      "scheduleItems": []
    }
  ]
}
"#
}
