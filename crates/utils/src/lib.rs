use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseError};

/// Pattern used for textual timestamps, e.g. `2021-03-14 09:26:53`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Pattern used when parsing without an explicit format, e.g. `2021-03-14`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats the given datetime with `format`, or with `DATETIME_FORMAT`
/// when no format is given.
pub fn format_datetime(dt: &NaiveDateTime, format: Option<&str>) -> String {
    // https://docs.rs/chrono/0.4/chrono/format/strftime/index.html
    dt.format(format.unwrap_or(DATETIME_FORMAT)).to_string()
}

/// Parses a datetime with `format`, or with `DATE_FORMAT` when no format is given.
///
/// Patterns without a time component resolve to midnight.
pub fn parse_datetime(value: &str, format: Option<&str>) -> Result<NaiveDateTime, ParseError> {
    let format = format.unwrap_or(DATE_FORMAT);
    match NaiveDateTime::parse_from_str(value, format) {
        Ok(dt) => Ok(dt),
        Err(e) => match NaiveDate::parse_from_str(value, format) {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
            Err(_) => Err(e),
        },
    }
}
