use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Ratings are drawn on a five-star scale even though the store accepts any
/// integer.
const STAR_SCALE: i64 = 5;

/// `4` becomes `★★★★☆`. Values outside the scale are clamped for display.
pub(crate) fn star_bar(rating: i64) -> String {
    let filled = rating.clamp(0, STAR_SCALE) as usize;
    let empty = STAR_SCALE as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
