/// Placeholder tokens the source workbooks use for "no data".
///
/// Matched case-insensitively after trimming. Anything else that fails to
/// parse as a number is also treated as missing, never as zero.
const MISSING_TOKENS: &[&str] = &["", "-", "–", "—", "...", "…", "n/a", "na", "nan", "null"];

/// Lenient numeric coercion for source cells.
///
/// Strips thousands separators and non-breaking spaces before parsing.
/// Returns `None` for placeholder tokens and unparseable text.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return None;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ',' | '\u{a0}' | ' '))
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Parse a year cell, tolerating spreadsheet exports like "2022.0".
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (1000.0..10000.0).contains(&value) {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_parse_as_missing() {
        for token in ["", "...", "…", "-", "N/A", "na"] {
            assert_eq!(parse_numeric(token), None, "token {token:?}");
        }
    }

    #[test]
    fn numbers_parse_with_separators() {
        assert_eq!(parse_numeric("1,473.5"), Some(1473.5));
        assert_eq!(parse_numeric(" 28 "), Some(28.0));
        assert_eq!(parse_numeric("67.8"), Some(67.8));
    }

    #[test]
    fn garbage_is_missing_not_zero() {
        assert_eq!(parse_numeric("no data"), None);
    }

    #[test]
    fn years_parse_from_int_and_float_text() {
        assert_eq!(parse_year("2022"), Some(2022));
        assert_eq!(parse_year("2018.0"), Some(2018));
        assert_eq!(parse_year("total"), None);
    }
}
