mod catalog;
mod film;
mod ids;

pub use catalog::Catalog;
pub use film::{Film, Screening, Venue};
pub use ids::{FilmId, ScreeningId};
