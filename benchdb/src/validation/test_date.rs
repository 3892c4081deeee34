use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Calendar date of an ISO-8601 date or date-time string.
pub fn parse_test_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(date_time.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
