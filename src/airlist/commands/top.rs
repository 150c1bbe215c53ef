use crate::commands::rank::rank;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AirlistError, Result};
use crate::model::Listing;
use std::num::IntErrorKind;

pub const DEFAULT_COUNT: usize = 10;
pub const INVALID_COUNT_MESSAGE: &str = "Please enter a valid positive number.";

/// Validates the user-supplied count for `list-top`.
///
/// A missing or blank argument falls back to `default`. Anything else must be
/// a whole number greater than zero. Counts too large for `usize` saturate,
/// since no dataset can hold that many listings anyway.
pub fn parse_count(arg: Option<&str>, default: usize) -> Result<usize> {
    let raw = match arg.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        _ => Err(AirlistError::Validation(INVALID_COUNT_MESSAGE.to_string())),
    }
}

pub fn run(records: &[Listing], count: usize) -> CmdResult {
    let ranked = rank(records, count);
    let mut result = CmdResult::default();
    if ranked.is_empty() {
        result.add_message(CmdMessage::warning("No listings found."));
    }
    result.with_listings(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn listing(id: &str, price: &str) -> Listing {
        Listing::from_pairs([
            ("listing_id", id),
            ("date", "2024-01-01"),
            ("available", "t"),
            ("price", price),
        ])
    }

    #[test]
    fn missing_count_uses_default() {
        assert_eq!(parse_count(None, DEFAULT_COUNT).unwrap(), 10);
        assert_eq!(parse_count(Some(""), DEFAULT_COUNT).unwrap(), 10);
        assert_eq!(parse_count(Some("   "), 7).unwrap(), 7);
    }

    #[test]
    fn accepts_positive_numbers() {
        assert_eq!(parse_count(Some("3"), DEFAULT_COUNT).unwrap(), 3);
        assert_eq!(parse_count(Some(" 25 "), DEFAULT_COUNT).unwrap(), 25);
    }

    #[test]
    fn huge_count_saturates() {
        let count = parse_count(Some("99999999999999999999999"), DEFAULT_COUNT).unwrap();
        assert_eq!(count, usize::MAX);

        let records = vec![listing("a", "$5"), listing("b", "$50")];
        assert_eq!(run(&records, count).listings.len(), 2);
    }

    #[test]
    fn rejects_huge_negative() {
        assert!(parse_count(Some("-99999999999999999999999"), DEFAULT_COUNT).is_err());
    }

    #[test]
    fn rejects_zero_and_negative() {
        for raw in ["0", "-1", "-50"] {
            let err = parse_count(Some(raw), DEFAULT_COUNT).unwrap_err();
            assert!(matches!(err, AirlistError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn rejects_non_numeric() {
        for raw in ["abc", "1.5", "12abc", "ten"] {
            assert!(parse_count(Some(raw), DEFAULT_COUNT).is_err(), "{raw}");
        }
    }

    #[test]
    fn validation_message_is_user_facing() {
        let err = parse_count(Some("0"), DEFAULT_COUNT).unwrap_err();
        assert_eq!(err.to_string(), INVALID_COUNT_MESSAGE);
    }

    #[test]
    fn run_returns_ranked_listings() {
        let records = vec![listing("a", "$5"), listing("b", "$50")];
        let result = run(&records, 1);
        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].listing.listing_id(), Some("b"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn run_on_empty_dataset_reports_no_listings() {
        let result = run(&[], 10);
        assert!(result.listings.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "No listings found.");
    }
}
