// Engine module - the pure planning core (filtering, layout, ordering)
// This layer sits between catalog types and CLI presentation

pub mod filter;
pub mod schedule;
pub mod selection;
pub mod shortlist;
pub mod summary;

pub use filter::{FilterParams, VisibleEntry, film_matches, select_visible};
pub use schedule::{
    AXIS_END_HOUR, AXIS_MINUTES, AXIS_START_HOUR, PlacedEntry, SlotPosition, layout, slot_position,
};
pub use summary::{CatalogSummary, FestivalSpan, summarize};
