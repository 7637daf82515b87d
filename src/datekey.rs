use chrono::{Datelike, Local, NaiveDate};

/// Canonical `YYYY-MM-DD` key for whatever calendar day `date` reports.
///
/// Composition is by calendar fields, never by slicing a UTC ISO string:
/// pass a `DateTime<Local>` (or any zone-aware datetime) and the key names
/// the user's local day even right around midnight.
pub fn date_key(date: &impl Datelike) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Key for the user's local today.
pub fn today_key() -> String {
    date_key(&Local::now())
}

/// Checks that `value` has the canonical zero-padded `YYYY-MM-DD` shape
/// and names a real calendar date.
pub fn is_date_key(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
