use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;

/// Parses an ISO 8601 date-time, with or without an explicit UTC offset.
///
/// The realtime API transmits service-local times without an offset
/// (`2025-03-31T16:30:00`); an offset, when present, is normalized away.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, crate::Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| crate::Error::InvalidDateTime(s.to_owned()))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(de::Error::custom)
}

pub fn serialize_datetime<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_datetime(dt))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, crate::Error> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| crate::Error::InvalidDate(s.to_owned()))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(de::Error::custom)
}

pub fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
}

#[test]
fn test_parse_datetime() {
    let plain = parse_datetime("2025-03-31T16:30:00").unwrap();
    let zulu = parse_datetime("2025-03-31T16:30:00Z").unwrap();
    assert_eq!(plain, zulu);
    assert_eq!("2025-03-31T16:30:00", format_datetime(&plain));

    let minutes = parse_datetime("2025-03-31T16:30").unwrap();
    assert_eq!(plain, minutes);

    assert!(parse_datetime("invalid-date").is_err());
    assert!(parse_datetime("").is_err());
}

#[test]
fn test_parse_date() {
    assert_eq!(
        chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        parse_date("2025-03-31").unwrap()
    );
    assert!(parse_date("20250331").is_err());
}
