//! Utility functions for the medal table

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Parse free-text score input from a numeric field
///
/// Returns `None` for anything that is not a finite number, including an
/// empty field.
pub fn parse_score_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|score| score.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_input() {
        assert_eq!(parse_score_input("12.5"), Some(12.5));
        assert_eq!(parse_score_input(" 7 "), Some(7.0));
        assert_eq!(parse_score_input("0"), Some(0.0));
        assert_eq!(parse_score_input("-3"), Some(-3.0));
    }

    #[test]
    fn test_parse_score_input_rejects_garbage() {
        assert_eq!(parse_score_input(""), None);
        assert_eq!(parse_score_input("   "), None);
        assert_eq!(parse_score_input("fast"), None);
        assert_eq!(parse_score_input("12,5"), None);
        assert_eq!(parse_score_input("NaN"), None);
        assert_eq!(parse_score_input("inf"), None);
    }
}
