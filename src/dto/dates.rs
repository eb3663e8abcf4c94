use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

/// Accepted input formats, tried in order. Output is always ISO 8601.
const FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("invalid date `{raw}`, expected YYYY-MM-DD or MM/DD/YYYY"))
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_date(&s).map_err(de::Error::custom))
        .transpose()
}
