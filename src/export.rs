//! Plain-text export: window filtering and report rendering.
//!
//! Both functions are pure over a log snapshot. Writing the rendered text
//! to a file (and anything like a share sheet) is the caller's job.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::models::LogEntry;

/// The time range used to filter entries for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportWindow {
    Week,
    Month,
    All,
}

impl ExportWindow {
    /// Maximum entry age kept by this window; `None` keeps everything.
    pub fn max_age(&self) -> Option<Duration> {
        match self {
            ExportWindow::Week => Some(Duration::days(7)),
            ExportWindow::Month => Some(Duration::days(30)),
            ExportWindow::All => None,
        }
    }
}

impl fmt::Display for ExportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportWindow::Week => write!(f, "week"),
            ExportWindow::Month => write!(f, "month"),
            ExportWindow::All => write!(f, "all"),
        }
    }
}

impl FromStr for ExportWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(ExportWindow::Week),
            "month" => Ok(ExportWindow::Month),
            "all" => Ok(ExportWindow::All),
            _ => Err(format!(
                "Invalid export window '{}'. Valid options: week, month, all",
                s
            )),
        }
    }
}

/// Keeps entries no older than the window allows, relative to `now`.
///
/// The boundary is inclusive: an entry exactly seven days old is kept by
/// the week window. Input order is preserved.
pub fn filter_by_window(
    entries: &[LogEntry],
    window: ExportWindow,
    now: DateTime<Utc>,
) -> Vec<LogEntry> {
    match window.max_age() {
        None => entries.to_vec(),
        Some(max_age) => entries
            .iter()
            .filter(|e| now.signed_duration_since(e.date) <= max_age)
            .cloned()
            .collect(),
    }
}

/// Renders one line per entry, `<MealType>: <calories> cal`, in input
/// order (insertion order, not grouped). Empty input yields an empty
/// string.
pub fn render_report(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {} cal", e.meal_type.label(), e.calories))
        .collect::<Vec<_>>()
        .join("\n")
}

/// File name for a report over the given window, e.g. `food_log_week.txt`.
pub fn report_filename(window: ExportWindow) -> String {
    format!("food_log_{}.txt", window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn entry_aged(days_old: i64, now: DateTime<Utc>) -> LogEntry {
        LogEntry {
            meal_type: MealType::Lunch,
            meal_name: format!("{} days ago", days_old),
            calories: 100,
            date: now - Duration::days(days_old),
        }
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!(ExportWindow::from_str("week").unwrap(), ExportWindow::Week);
        assert_eq!(
            ExportWindow::from_str("Month").unwrap(),
            ExportWindow::Month
        );
        assert_eq!(ExportWindow::from_str("ALL").unwrap(), ExportWindow::All);
        assert!(ExportWindow::from_str("year").is_err());
    }

    #[test]
    fn test_week_window_example() {
        let now = Utc::now();
        let entries = vec![entry_aged(10, now), entry_aged(2, now)];

        let kept = filter_by_window(&entries, ExportWindow::Week, now);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].meal_name, "2 days ago");
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = Utc::now();
        let entries = vec![entry_aged(7, now)];

        let kept = filter_by_window(&entries, ExportWindow::Week, now);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_month_window() {
        let now = Utc::now();
        let entries = vec![entry_aged(31, now), entry_aged(30, now), entry_aged(10, now)];

        let kept = filter_by_window(&entries, ExportWindow::Month, now);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_all_window_keeps_everything() {
        let now = Utc::now();
        let entries = vec![entry_aged(400, now), entry_aged(0, now)];

        let kept = filter_by_window(&entries, ExportWindow::All, now);
        assert_eq!(kept, entries);
    }

    #[test]
    fn test_render_report_format_and_order() {
        let now = Utc::now();
        let entries = vec![
            LogEntry {
                meal_type: MealType::Lunch,
                meal_name: "Salad".to_string(),
                calories: 400,
                date: now,
            },
            LogEntry {
                meal_type: MealType::Breakfast,
                meal_name: "Oatmeal".to_string(),
                calories: 250,
                date: now,
            },
        ];

        let report = render_report(&entries);
        assert_eq!(report, "Lunch: 400 cal\nBreakfast: 250 cal");
    }

    #[test]
    fn test_render_report_empty_is_empty_string() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename(ExportWindow::Week), "food_log_week.txt");
        assert_eq!(report_filename(ExportWindow::Month), "food_log_month.txt");
        assert_eq!(report_filename(ExportWindow::All), "food_log_all.txt");
    }
}
