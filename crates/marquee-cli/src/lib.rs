// NOTE: marquee Architecture Rationale
//
// Why a session container (not module-level state)?
// - The shortlist and selection set are owned by one Planner per process;
//   every command reads the current value and writes the next in one step,
//   so there is no hidden coupling to render or refresh timing
// - Persistence is an explicit port behind the Planner (load once at open,
//   write through on every mutation), not ambient storage access
//
// Why eager recomputation (not cached derived state)?
// - Visible sets and timetable layouts are recomputed from scratch per
//   command; a catalog is one festival's programme, small enough that
//   staleness bugs would cost more than the recompute ever will
//
// Why ids everywhere (not indices)?
// - Stored state references films/screenings by catalog id only, so a
//   catalog refresh between sessions never corrupts the plan; unknown ids
//   drop out of views at read time and self-heal if they reappear

mod args;
mod commands;
mod handlers;
pub mod output;
pub mod types;

pub use args::{Cli, Commands, FavoriteCommand, FilmCommand, SelectCommand};
pub use commands::run;
