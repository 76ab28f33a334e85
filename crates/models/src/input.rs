use chrono::{Datelike, Local};

/// Trims and lower-cases a raw operator answer
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes an optional answer, mapping blank input to `None`
pub fn normalize_optional(raw: &str) -> Option<String> {
    let value = normalize(raw);
    (!value.is_empty()).then_some(value)
}

/// Parses an integer answer, yielding `None` when it is blank or malformed
pub fn parse_int(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Parses an integer answer, falling back to `default` when it is blank or malformed
pub fn parse_int_or(raw: &str, default: i32) -> i32 {
    parse_int(raw).unwrap_or(default)
}

/// The current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}
