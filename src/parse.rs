// src/parse.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Timestamp used for empty cells in a date column (1970-01-01).
pub const EPOCH_SENTINEL_MS: f64 = 0.0;

/// Characters a cell must contain before it is considered for date parsing.
pub const DATE_MARKERS: [char; 3] = ['/', '-', ':'];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%b-%d-%Y",
];

pub fn has_date_marker(value: &str) -> bool {
    value.contains(DATE_MARKERS)
}

/// Parses a date or date-time into milliseconds since the Unix epoch.
///
/// Offset-aware inputs (RFC 3339, RFC 2822) keep their offset; everything
/// else is read as UTC.
pub fn parse_date(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.timestamp_millis() as f64);
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(naive.and_utc().timestamp_millis() as f64)
}

/// True when the value both looks like a date and parses as one.
pub fn is_date(value: &str) -> bool {
    has_date_marker(value) && parse_date(value).is_some()
}

/// Drops thousands separators and percent signs.
pub fn clean_number(value: &str) -> String {
    value.replace([',', '%'], "").trim().to_string()
}

/// Parses the longest leading decimal literal, ignoring any trailing text.
///
/// `"12.5kg"` reads as `12.5`, `"1e3"` as `1000`. Returns `None` when the
/// value does not start with a number.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return Some(if s.starts_with('-') { -inf } else { inf });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Numeric value of a cell: empty is `0`, unparseable is `NaN`.
pub fn parse_number(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    parse_float_prefix(&clean_number(value)).unwrap_or(f64::NAN)
}

/// Date value of a cell: empty is the epoch sentinel, unparseable is `NaN`.
pub fn parse_timestamp(value: &str) -> f64 {
    if value.is_empty() {
        return EPOCH_SENTINEL_MS;
    }
    parse_date(value).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_date_shapes() {
        let jan1 = parse_date("2024-01-01").unwrap();
        assert_eq!(parse_date("1/1/2024"), Some(jan1));
        assert_eq!(parse_date("01/01/2024"), Some(jan1));
        assert_eq!(parse_date("2024/01/01"), Some(jan1));
        assert_eq!(parse_date("2024-01-01T00:00:00Z"), Some(jan1));
        assert_eq!(parse_date("2024-01-01 00:01"), Some(jan1 + 60_000.0));
        assert_eq!(parse_date("1970-01-01"), Some(EPOCH_SENTINEL_MS));
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("12-34"), None);
        assert_eq!(parse_date("n/a"), None);
        assert_eq!(parse_date("13/45/2024"), None);
        assert!(!is_date("20240101"));
    }

    #[test]
    fn strips_every_separator() {
        assert_eq!(clean_number(" 1,234,567.5% "), "1234567.5");
        assert_eq!(parse_number("1,234,567"), 1_234_567.0);
        assert_eq!(parse_number("10%"), 10.0);
    }

    #[test]
    fn float_prefix_matches_lenient_parsing() {
        assert_eq!(parse_float_prefix("12.5kg"), Some(12.5));
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("10:30"), Some(10.0));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn empty_and_garbage_cells() {
        assert_eq!(parse_number(""), 0.0);
        assert!(parse_number("%").is_nan());
        assert!(parse_number("x").is_nan());
        assert_eq!(parse_timestamp(""), EPOCH_SENTINEL_MS);
        assert!(parse_timestamp("soon").is_nan());
    }
}
