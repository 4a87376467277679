//! Foodlog Core Library
//!
//! UI-independent core for a food logging application: a persistent meal
//! log, calorie aggregation, plain-text export, app settings, and theme
//! colors. Front ends (the bundled CLI, or anything else) call into this
//! library and own the presentation.

pub mod aggregate;
pub mod export;
pub mod models;
pub mod notify;
pub mod settings;
pub mod store;
pub mod theme;

pub use aggregate::{group_by_meal_type, total_calories};
pub use export::{filter_by_window, render_report, report_filename, ExportWindow};
pub use models::{EntryDraft, LogEntry, MealType};
pub use notify::{Notifier, NotifyError, TracingNotifier};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use store::{JsonFileStorage, KvStorage, LogError, LogStore, MemoryStorage, StorageError};
pub use theme::{Theme, ThemeMode};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
