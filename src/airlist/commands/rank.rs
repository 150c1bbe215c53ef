//! Price ranking: the core of the `list-top` command.
//!
//! Ranking is a pure function over borrowed listings. It never reads files or
//! touches the cache, so every call produces a fresh, independent result.

use crate::model::{Listing, RankedListing};

/// Parses a raw price such as `"$1,234.50"`.
///
/// Every `$` and `,` is removed, then the longest leading decimal number is
/// read, so `"$120.00 USD"` is 120 and `"12abc"` is 12. Input with no leading
/// number (`"abc"`, `""`) or a non-finite one yields `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    numeric_prefix(cleaned.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// The leading `[+-]digits[.digits][e[+-]digits]` run of `s`, possibly empty.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

/// Returns the `count` most expensive listings, highest price first.
///
/// Listings without a parseable price are left out. The sort is stable, so
/// listings with equal prices keep their load order. `count` larger than the
/// number of priced listings returns all of them.
pub fn rank(records: &[Listing], count: usize) -> Vec<RankedListing> {
    let mut ranked: Vec<RankedListing> = records
        .iter()
        .filter_map(|listing| {
            let price = parse_price(listing.raw_price()?)?;
            Some(RankedListing::new(listing.clone(), price))
        })
        .collect();

    ranked.sort_by(|a, b| b.price.total_cmp(&a.price));
    ranked.truncate(count);
    ranked
}
