pub mod films;
pub mod timetable;

use chrono::{DateTime, FixedOffset, NaiveDate};
use is_terminal::IsTerminal;

pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Wall-clock time the way the programme prints it: "7:00 PM".
pub fn format_clock(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%-I:%M %p").to_string()
}

/// Day header: "Wednesday, September 10".
pub fn format_day(day: NaiveDate) -> String {
    day.format("%A, %B %-d").to_string()
}
