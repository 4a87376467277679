//! Pure aggregation over a log snapshot. No state, no I/O.

use std::collections::HashMap;

use crate::models::{LogEntry, MealType};

/// Groups entries by meal type.
///
/// Every meal type is present as a key, empty groups included, so callers
/// can render all four dashboard sections without special cases. Each
/// entry lands in exactly one group and keeps its insertion order within
/// the group. Meal types are a closed enum validated when an entry is
/// created or loaded, so the grouping is a total partition of the input —
/// there is no "unrecognized" bucket.
pub fn group_by_meal_type(entries: &[LogEntry]) -> HashMap<MealType, Vec<LogEntry>> {
    let mut groups: HashMap<MealType, Vec<LogEntry>> = MealType::ALL
        .iter()
        .map(|meal_type| (*meal_type, Vec::new()))
        .collect();

    for entry in entries {
        groups
            .entry(entry.meal_type)
            .or_default()
            .push(entry.clone());
    }

    groups
}

/// Sums calories over all entries.
///
/// The sum is exact: unparsable calorie input is rejected before an entry
/// is created or loaded, so it can never reach this function as a silent
/// zero.
pub fn total_calories(entries: &[LogEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.calories)).sum()
}
