use std::collections::BTreeMap;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use marquee_engine::{AXIS_END_HOUR, AXIS_MINUTES, AXIS_START_HOUR, PlacedEntry};
use marquee_runtime::Planner;

use crate::output;

/// Columns reserved to the right of the grid for the label text.
const LABEL_RESERVE: usize = 48;
const MIN_GRID_WIDTH: usize = 38;
const MAX_GRID_WIDTH: usize = 114;

fn grid_width() -> usize {
    let cols = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(120);
    cols.saturating_sub(LABEL_RESERVE)
        .clamp(MIN_GRID_WIDTH, MAX_GRID_WIDTH)
}

fn hour_label(hour: i64) -> String {
    match hour {
        12 => "12PM".to_string(),
        24 => "12AM".to_string(),
        h if h < 12 => format!("{}AM", h),
        h if h < 24 => format!("{}PM", h - 12),
        h => format!("{}AM", h - 24),
    }
}

/// The 2-hourly ruler row: "8AM   10AM  12PM  ..." positioned on the grid.
fn hour_ruler(grid: usize) -> String {
    let mut cells = vec![' '; grid];

    let mut hour = AXIS_START_HOUR;
    while hour < AXIS_END_HOUR {
        let minutes = (hour - AXIS_START_HOUR) * 60;
        let col = (minutes as f64 / AXIS_MINUTES as f64 * grid as f64).round() as usize;
        for (offset, ch) in hour_label(hour).chars().enumerate() {
            if col + offset < grid {
                cells[col + offset] = ch;
            }
        }
        hour += 2;
    }

    cells.into_iter().collect()
}

fn bar_cells(placed: &PlacedEntry<'_>, grid: usize) -> (usize, usize) {
    let start = ((placed.slot.left * grid as f64).round() as usize).min(grid - 1);
    // Degenerate intervals (clamped to zero or negative width) still get a
    // minimum visible bar.
    let len = ((placed.slot.width * grid as f64).round() as isize).max(1) as usize;
    let len = len.min(grid - start);
    (start, len)
}

pub fn print_timetable(
    days: &BTreeMap<NaiveDate, Vec<PlacedEntry<'_>>>,
    planner: &Planner,
    enable_color: bool,
) {
    if days.is_empty() {
        let msg = "No screenings match the current filters";
        if enable_color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    let grid = grid_width();
    let ruler = hour_ruler(grid);

    for (day, entries) in days {
        let header = output::format_day(*day);
        if enable_color {
            println!("{}", header.bold());
            println!("{}", ruler.bright_black());
        } else {
            println!("{}", header);
            println!("{}", ruler);
        }

        for placed in entries {
            let (start, len) = bar_cells(placed, grid);
            let bar: String = "\u{2588}".repeat(len);
            let pad_left = " ".repeat(start);
            let pad_right = " ".repeat(grid - start - len);

            let selected = planner.is_selected(&placed.screening.id);
            let industry = placed.screening.is_industry_restricted();
            let favorite = planner.is_favorite(&placed.film.id);

            let mut label = format!(
                "{}  {}",
                output::format_clock(&placed.screening.start_time),
                placed.film.title
            );
            if favorite {
                label = format!("* {}", label);
            } else {
                label = format!("  {}", label);
            }
            label.push_str(&format!(" @ {}", placed.screening.venue.label()));
            if selected {
                label.push_str(" [selected]");
            }
            if industry {
                label.push_str(" [industry]");
            }

            if enable_color {
                let colored_bar = if selected {
                    format!("{}", bar.green())
                } else if industry {
                    format!("{}", bar.bright_black())
                } else {
                    format!("{}", bar.blue())
                };
                println!("{}{}{}  {}", pad_left, colored_bar, pad_right, label);
            } else {
                println!("{}{}{}  {}", pad_left, bar, pad_right, label);
            }
        }

        println!();
    }
}
