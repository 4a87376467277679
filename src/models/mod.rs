mod log_entry;
mod meal_type;

pub use log_entry::{EntryDraft, LogEntry};
pub use meal_type::MealType;
