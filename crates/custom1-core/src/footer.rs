//! Footer text: copyright range and filing links.

use chrono::{Datelike, Utc};

/// Copyright range: `since-current` when `since` is an earlier year, otherwise
/// just the current year.
///
/// `since` is read up to its first non-digit, so `"2021 (moved)"` counts as 2021.
pub fn copyright_range(since: Option<&str>, current_year: i32) -> String {
    match since.and_then(leading_year) {
        Some(year) if year < current_year => format!("{year}-{current_year}"),
        _ => current_year.to_string(),
    }
}

/// Copyright range for the current UTC year.
pub fn copyright_range_now(since: Option<&str>) -> String {
    copyright_range(since, Utc::now().year())
}

/// Year at the start of `text`, read up to the first non-digit.
pub fn leading_year(text: &str) -> Option<i32> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}

/// Record number embedded in a public security filing text.
pub fn gongan_code(text: &str) -> Option<String> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Lookup link for a public security filing.
pub fn gongan_href(text: &str) -> Option<String> {
    gongan_code(text)
        .map(|code| format!("https://beian.mps.gov.cn/#/query/webSearch?code={code}"))
}
