use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cleaning zone priority, always one of three tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalized form for display ("High", "Medium", "Low").
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Maps a legacy 1-10 priority level onto the three tiers.
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=3 => Priority::High,
            4..=7 => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(()),
        }
    }
}

/// Normalizes a raw priority value as it appears in forms and legacy records.
///
/// Integers map through [`Priority::from_level`], tier names are accepted in
/// any case, and everything else (including a missing value) is `Medium`.
pub fn normalize_priority(raw: Option<&str>) -> Priority {
    let Some(raw) = raw else {
        return Priority::Medium;
    };
    let trimmed = raw.trim();
    if let Ok(level) = trimmed.parse::<i64>() {
        return Priority::from_level(level);
    }
    trimmed.parse().unwrap_or_default()
}

/// Priority exactly as the backend sent it.
///
/// Older zone records carry a numeric level (sometimes as a string), newer ones
/// a tier name. Anything else is kept so deserialization never fails on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPriority {
    #[default]
    Missing,
    Level(i64),
    Tag(String),
    Other(serde_json::Value),
}

impl RawPriority {
    pub fn normalize(&self) -> Priority {
        match self {
            RawPriority::Missing => Priority::Medium,
            RawPriority::Level(level) => Priority::from_level(*level),
            RawPriority::Tag(tag) => normalize_priority(Some(tag)),
            // JS-era clients truncated fractional levels
            RawPriority::Other(serde_json::Value::Number(n)) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| Priority::from_level(v.trunc() as i64))
                .unwrap_or_default(),
            RawPriority::Other(_) => Priority::Medium,
        }
    }
}

impl From<Priority> for RawPriority {
    fn from(priority: Priority) -> Self {
        RawPriority::Tag(priority.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_levels() {
        assert_eq!(normalize_priority(Some("3")), Priority::High);
        assert_eq!(normalize_priority(Some("5")), Priority::Medium);
        assert_eq!(normalize_priority(Some("9")), Priority::Low);
        assert_eq!(normalize_priority(Some("7")), Priority::Medium);
        assert_eq!(normalize_priority(Some("8")), Priority::Low);
        assert_eq!(normalize_priority(Some("1")), Priority::High);
        assert_eq!(normalize_priority(Some("10")), Priority::Low);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(Priority::from_level(-4), Priority::High);
        assert_eq!(Priority::from_level(0), Priority::High);
        assert_eq!(Priority::from_level(3), Priority::High);
        assert_eq!(Priority::from_level(4), Priority::Medium);
        assert_eq!(Priority::from_level(7), Priority::Medium);
        assert_eq!(Priority::from_level(8), Priority::Low);
        assert_eq!(Priority::from_level(i64::MAX), Priority::Low);
    }

    #[test]
    fn test_tags_any_case() {
        assert_eq!(normalize_priority(Some("LOW")), Priority::Low);
        assert_eq!(normalize_priority(Some("High")), Priority::High);
        assert_eq!(normalize_priority(Some(" medium ")), Priority::Medium);
    }

    #[test]
    fn test_missing_or_unknown_defaults_to_medium() {
        assert_eq!(normalize_priority(None), Priority::Medium);
        assert_eq!(normalize_priority(Some("")), Priority::Medium);
        assert_eq!(normalize_priority(Some("urgent")), Priority::Medium);
        assert_eq!(normalize_priority(Some("5.5")), Priority::Medium);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs: Vec<Option<String>> = (1..=10)
            .map(|n| Some(n.to_string()))
            .chain(
                ["high", "medium", "low", "", "7", "LOW", "bogus"]
                    .iter()
                    .map(|s| Some(s.to_string())),
            )
            .chain(std::iter::once(None))
            .collect();

        for input in inputs {
            let once = normalize_priority(input.as_deref());
            let twice = normalize_priority(Some(once.as_str()));
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse(), Ok(Priority::High));
        assert_eq!("MEDIUM".parse(), Ok(Priority::Medium));
        assert_eq!("Low".parse(), Ok(Priority::Low));
        assert!("3".parse::<Priority>().is_err());
    }

    #[test]
    fn test_raw_priority_deserialize() {
        let level: RawPriority = serde_json::from_str("2").unwrap();
        assert_eq!(level, RawPriority::Level(2));
        assert_eq!(level.normalize(), Priority::High);

        let tag: RawPriority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(tag.normalize(), Priority::Low);

        let numeric_string: RawPriority = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(numeric_string.normalize(), Priority::Low);

        let null: RawPriority = serde_json::from_str("null").unwrap();
        assert_eq!(null, RawPriority::Missing);
        assert_eq!(null.normalize(), Priority::Medium);

        let fractional: RawPriority = serde_json::from_str("8.5").unwrap();
        assert_eq!(fractional.normalize(), Priority::Low);

        let odd: RawPriority = serde_json::from_str("[1]").unwrap();
        assert_eq!(odd.normalize(), Priority::Medium);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(Priority::Low.label(), "Low");
        assert_eq!(Priority::Medium.to_string(), "medium");
    }
}
