use chrono::{Datelike, NaiveDate, NaiveDateTime};

// Accepted timestamp layouts after normalizing the 'T' separator to a space.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Converts an ISO-style timestamp ("2025-07-26T09:00:00" or with a space
/// separator) to "HH:MM". Formatting is display-only: on any parse failure
/// the input comes back unchanged so aggregation never aborts on bad data.
pub fn format_time(time_str: &str) -> String {
    let normalized = time_str.replacen('T', " ", 1);
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(normalized.trim(), fmt) {
            return dt.format("%H:%M").to_string();
        }
    }
    time_str.to_string()
}

/// Converts an ISO date ("2025-07-26") to "M/D" without leading zeros.
/// Returns the input unchanged when it doesn't parse.
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(d) => format!("{}/{}", d.month(), d.day()),
        Err(_) => date_str.to_string(),
    }
}
