use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_DISPLAY: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATE_DISPLAY: &str = "%-m/%-d/%Y";
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Human readable date-time, e.g. `6/1/2024, 8:30:00 AM`.
///
/// Timestamps carrying an offset are shown in that offset. Anything that
/// does not parse is shown as received.
pub fn display_date_time(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_TIME_DISPLAY).to_string();
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(DATE_TIME_DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Calendar date, e.g. `5/1/1990`. Accepts plain dates and full timestamps.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(DATE_DISPLAY).to_string();
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date().format(DATE_DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `NaiveDateTime` as shown in flight listings.
pub fn display_naive(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_DISPLAY).to_string()
}
