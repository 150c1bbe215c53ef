//! # Display Mapping
//!
//! Turns ranked listings into table-ready data: every cell already converted
//! to a label, every row already tagged with its rank. The terminal renderer
//! only decides widths and colors; it never looks at raw values.

use crate::model::{RankedListing, AVAILABLE_FIELD, PRICE_FIELD};
use std::fmt;

pub const RANK_HEADER: &str = "#";

/// A single table cell, already mapped from the raw CSV value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Yes,
    No,
    Missing,
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Yes => write!(f, "Yes"),
            CellValue::No => write!(f, "No"),
            CellValue::Missing => write!(f, "N/A"),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Maps a raw field value to its display label.
///
/// `t`/`true` and `f`/`false` read as booleans in any column. In the
/// `available` column `1` and `0` do as well; elsewhere they are just numbers.
pub fn label_for(field: &str, value: Option<&str>) -> CellValue {
    let Some(value) = value else {
        return CellValue::Missing;
    };

    match value.to_ascii_lowercase().as_str() {
        "t" | "true" => CellValue::Yes,
        "f" | "false" => CellValue::No,
        "1" if field == AVAILABLE_FIELD => CellValue::Yes,
        "0" if field == AVAILABLE_FIELD => CellValue::No,
        _ => CellValue::Text(value.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub cells: Vec<CellValue>,
}

/// Header plus rows, one cell per column, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTable {
    pub columns: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Builds the display table for a ranking.
///
/// Columns are the union of all observed field names in first-seen order.
/// The price column shows the parsed number rather than the raw string.
pub fn tabulate(listings: &[RankedListing]) -> DisplayTable {
    let mut columns: Vec<String> = Vec::new();
    for ranked in listings {
        for name in ranked.listing.field_names() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }

    let rows = listings
        .iter()
        .enumerate()
        .map(|(i, ranked)| DisplayRow {
            rank: i + 1,
            cells: columns
                .iter()
                .map(|column| {
                    if column == PRICE_FIELD {
                        CellValue::Text(format_price(ranked.price))
                    } else {
                        label_for(column, ranked.listing.get(column))
                    }
                })
                .collect(),
        })
        .collect();

    DisplayTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Listing;

    fn ranked(pairs: &[(&str, &str)], price: f64) -> RankedListing {
        RankedListing::new(Listing::from_pairs(pairs.iter().copied()), price)
    }

    #[test]
    fn boolean_tokens_map_to_yes_no() {
        assert_eq!(label_for("available", Some("t")), CellValue::Yes);
        assert_eq!(label_for("available", Some("TRUE")), CellValue::Yes);
        assert_eq!(label_for("available", Some("f")), CellValue::No);
        assert_eq!(label_for("available", Some("false")), CellValue::No);
        assert_eq!(label_for("instant_bookable", Some("t")), CellValue::Yes);
    }

    #[test]
    fn numeric_booleans_only_in_available_column() {
        assert_eq!(label_for("available", Some("1")), CellValue::Yes);
        assert_eq!(label_for("available", Some("0")), CellValue::No);
        assert_eq!(
            label_for("minimum_nights", Some("1")),
            CellValue::Text("1".into())
        );
    }

    #[test]
    fn missing_maps_to_placeholder() {
        assert_eq!(label_for("anything", None), CellValue::Missing);
        assert_eq!(CellValue::Missing.to_string(), "N/A");
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(
            label_for("date", Some("2024-01-01")),
            CellValue::Text("2024-01-01".into())
        );
        assert_eq!(label_for("note", Some("")), CellValue::Text(String::new()));
    }

    #[test]
    fn tabulate_tags_rows_with_rank() {
        let listings = vec![
            ranked(&[("listing_id", "b"), ("price", "$1,200.50")], 1200.5),
            ranked(&[("listing_id", "a"), ("price", "$300")], 300.0),
        ];

        let table = tabulate(&listings);
        assert_eq!(table.columns, vec!["listing_id", "price"]);
        assert_eq!(table.rows[0].rank, 1);
        assert_eq!(table.rows[1].rank, 2);
        assert_eq!(table.rows[0].cells[1], CellValue::Text("1200.50".into()));
        assert_eq!(table.rows[1].cells[0], CellValue::Text("a".into()));
    }

    #[test]
    fn tabulate_fills_unseen_fields_with_missing() {
        let listings = vec![
            ranked(&[("listing_id", "1"), ("available", "t")], 10.0),
            ranked(&[("listing_id", "2"), ("name", "Loft")], 5.0),
        ];

        let table = tabulate(&listings);
        assert_eq!(table.columns, vec!["listing_id", "available", "name"]);
        assert_eq!(table.rows[0].cells[1], CellValue::Yes);
        assert_eq!(table.rows[0].cells[2], CellValue::Missing);
        assert_eq!(table.rows[1].cells[1], CellValue::Missing);
    }

    #[test]
    fn empty_ranking_gives_empty_table() {
        let table = tabulate(&[]);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
