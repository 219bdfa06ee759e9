use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde::Serialize;

use marquee_types::{Film, Screening};

use crate::filter::VisibleEntry;

/// First hour of the daily axis (08:00).
pub const AXIS_START_HOUR: i64 = 8;
/// Last hour of the daily axis, counted past midnight (27 = 03:00 next day).
pub const AXIS_END_HOUR: i64 = 27;
/// Total axis span in minutes.
pub const AXIS_MINUTES: i64 = (AXIS_END_HOUR - AXIS_START_HOUR) * 60;

/// Normalized horizontal interval on the daily axis.
///
/// Both fields are fractions of the axis span. `left` is always in [0, 1);
/// `width` can clamp to zero or below for screenings entirely outside the
/// displayed window. That is not an error: renderers floor the drawn bar at
/// a minimum visible width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotPosition {
    pub left: f64,
    pub width: f64,
}

/// A visible screening placed on the axis.
#[derive(Debug, Clone, Copy)]
pub struct PlacedEntry<'a> {
    pub film: &'a Film,
    pub screening: &'a Screening,
    pub slot: SlotPosition,
}

fn wall_clock_minutes(ts: &DateTime<FixedOffset>) -> i64 {
    (ts.hour() as i64) * 60 + ts.minute() as i64
}

/// Compute the axis position of a screening from its two timestamps.
///
/// Placement uses each timestamp's own local wall clock; no timezone
/// conversion happens here. A screening that runs past midnight wraps the
/// wall clock back to zero, so when the end minutes land at or before the
/// start minutes and the end date is the following calendar day, the end is
/// pushed past 24:00 before clamping. The axis extends to hour 27 exactly to
/// host these after-midnight endings on the same visual day.
pub fn slot_position(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> SlotPosition {
    let start_minutes = wall_clock_minutes(start);
    let mut end_minutes = wall_clock_minutes(end);

    if end_minutes <= start_minutes && start.date_naive().succ_opt() == Some(end.date_naive()) {
        end_minutes += 24 * 60;
    }

    let axis_start = AXIS_START_HOUR * 60;
    let rel_start = (start_minutes - axis_start).max(0);
    let rel_end = (end_minutes - axis_start).min(AXIS_MINUTES);

    SlotPosition {
        left: rel_start as f64 / AXIS_MINUTES as f64,
        width: (rel_end - rel_start) as f64 / AXIS_MINUTES as f64,
    }
}

/// Place every visible entry on the axis and group by calendar day.
///
/// The day key is the local calendar date of the start timestamp, not the
/// 8am-3am logical festival day: a 1:00 AM screening groups under its own
/// calendar date, visually separated from the previous evening.
///
/// Within each day, entries sort ascending by absolute start timestamp;
/// the sort is stable, so ties keep catalog order. Identical screenings are
/// never merged.
pub fn layout<'a>(entries: &[VisibleEntry<'a>]) -> BTreeMap<NaiveDate, Vec<PlacedEntry<'a>>> {
    let mut days: BTreeMap<NaiveDate, Vec<PlacedEntry<'a>>> = BTreeMap::new();

    for entry in entries {
        let slot = slot_position(&entry.screening.start_time, &entry.screening.end_time);
        days.entry(entry.screening.start_time.date_naive())
            .or_default()
            .push(PlacedEntry {
                film: entry.film,
                screening: entry.screening,
                slot,
            });
    }

    for group in days.values_mut() {
        group.sort_by_key(|placed| placed.screening.start_time);
    }

    days
}
