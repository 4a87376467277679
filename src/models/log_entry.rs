use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::meal_type::MealType;

/// One recorded meal: what was eaten, its calorie count, and when it was
/// logged. Entries are immutable once created; the log supports only
/// append and delete-by-position.
///
/// The serialized form uses camelCase keys (`mealType`, `mealName`,
/// `calories`, `date`) to stay compatible with the existing `foodLogs`
/// record. `calories` is written as a JSON number, but records written by
/// older versions stored it as a numeric string, so reads accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub meal_type: MealType,
    pub meal_name: String,
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: u32,
    pub date: DateTime<Utc>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} cal", self.meal_name, self.calories)
    }
}

/// Candidate fields for a new entry, exactly as collected from the user.
///
/// `calories` stays raw text here; it is parsed and validated when the
/// draft is appended to the log, so unparsable input never reaches stored
/// data.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub meal_type: MealType,
    pub meal_name: String,
    pub calories: String,
}

impl EntryDraft {
    pub fn new(
        meal_type: MealType,
        meal_name: impl Into<String>,
        calories: impl Into<String>,
    ) -> Self {
        Self {
            meal_type,
            meal_name: meal_name.into(),
            calories: calories.into(),
        }
    }
}

fn deserialize_calories<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCalories {
        Number(u32),
        Text(String),
    }

    match RawCalories::deserialize(deserializer)? {
        RawCalories::Number(n) => Ok(n),
        RawCalories::Text(s) => s.trim().parse::<u32>().map_err(|_| {
            serde::de::Error::custom(format!("invalid calories value '{}'", s))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(calories: u32) -> LogEntry {
        LogEntry {
            meal_type: MealType::Breakfast,
            meal_name: "Oatmeal".to_string(),
            calories,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_log_entry_display() {
        let output = format!("{}", entry(250));
        assert_eq!(output, "Oatmeal: 250 cal");
    }

    #[test]
    fn test_log_entry_json_uses_camel_case_keys() {
        let json = serde_json::to_value(entry(250)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("mealType"));
        assert!(obj.contains_key("mealName"));
        assert!(obj.contains_key("calories"));
        assert!(obj.contains_key("date"));
        assert_eq!(obj["calories"], serde_json::json!(250));
    }

    #[test]
    fn test_log_entry_json_roundtrip() {
        let original = entry(480);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_calories_accepts_numeric_string() {
        let json = r#"{"mealType":"Breakfast","mealName":"Oatmeal","calories":"250","date":"2025-01-01T08:00:00Z"}"#;
        let parsed: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.calories, 250);
        assert_eq!(parsed.meal_type, MealType::Breakfast);
    }

    #[test]
    fn test_calories_rejects_non_numeric_string() {
        let json = r#"{"mealType":"lunch","mealName":"Salad","calories":"abc","date":"2025-01-01T12:00:00Z"}"#;
        assert!(serde_json::from_str::<LogEntry>(json).is_err());
    }

    #[test]
    fn test_calories_rejects_negative_number() {
        let json = r#"{"mealType":"lunch","mealName":"Salad","calories":-10,"date":"2025-01-01T12:00:00Z"}"#;
        assert!(serde_json::from_str::<LogEntry>(json).is_err());
    }

    #[test]
    fn test_date_parses_iso_instant() {
        let json = r#"{"mealType":"dinner","mealName":"Pasta","calories":600,"date":"2025-03-10T19:30:00.000Z"}"#;
        let parsed: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.date.to_rfc3339(), "2025-03-10T19:30:00+00:00");
    }
}
