//! # Rendering Module
//!
//! Terminal output for the CLI: the listings table and command messages.
//!
//! Layout (column widths, padding) is computed on plain text with
//! `unicode-width`, and styles are applied afterwards, so ANSI codes never
//! throw off alignment. Colors follow terminal detection unless a caller
//! forces them on or off (tests do).

use super::styles::TABLE_THEME;
use airlist::api::MessageLevel;
use airlist::commands::CmdMessage;
use airlist::display::{CellValue, DisplayTable, RANK_HEADER};
use colored::Colorize;
use console::Style;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_TABLE_MESSAGE: &str = "No data available.";

/// Horizontal space added to every column, one space on each side.
const CELL_PADDING: usize = 2;

struct Cell<'a> {
    text: String,
    style: &'a Style,
}

/// Renders a display table as a boxed terminal table.
pub fn render_listing_table(table: &DisplayTable) -> String {
    render_listing_table_internal(table, None)
}

fn render_listing_table_internal(table: &DisplayTable, use_color: Option<bool>) -> String {
    if table.is_empty() {
        return format!("{}\n", EMPTY_TABLE_MESSAGE);
    }

    let theme = &*TABLE_THEME;

    let header: Vec<Cell> = std::iter::once(RANK_HEADER)
        .chain(table.columns.iter().map(String::as_str))
        .enumerate()
        .map(|(i, name)| Cell {
            text: name.to_string(),
            style: theme.header(i),
        })
        .collect();

    let body: Vec<Vec<Cell>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(Cell {
                text: row.rank.to_string(),
                style: &theme.rank,
            })
            .chain(row.cells.iter().map(|value| Cell {
                text: value.to_string(),
                style: match value {
                    CellValue::Yes => &theme.yes,
                    CellValue::No => &theme.no,
                    CellValue::Missing => &theme.missing,
                    CellValue::Text(_) => &theme.text,
                },
            }))
            .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            body.iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(&header[col]))
                .map(|cell| cell.text.width())
                .max()
                .unwrap_or(0)
                + CELL_PADDING
        })
        .collect();

    let mut output = String::new();
    output.push_str(&border_line(&widths, ('┌', '┬', '┐'), use_color));
    output.push_str(&row_line(&header, &widths, use_color));
    output.push_str(&border_line(&widths, ('├', '┼', '┤'), use_color));
    for row in &body {
        output.push_str(&row_line(row, &widths, use_color));
    }
    output.push_str(&border_line(&widths, ('└', '┴', '┘'), use_color));
    output
}

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(force) => style.clone().force_styling(force).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}

fn border_line(
    widths: &[usize],
    (left, mid, right): (char, char, char),
    use_color: Option<bool>,
) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    let line = format!("{}{}{}", left, segments.join(&mid.to_string()), right);
    format!("{}\n", paint(&TABLE_THEME.border, &line, use_color))
}

fn row_line(cells: &[Cell], widths: &[usize], use_color: Option<bool>) -> String {
    let bar = paint(&TABLE_THEME.border, "│", use_color);
    let mut line = bar.clone();
    for (cell, width) in cells.iter().zip(widths) {
        let fill = width.saturating_sub(cell.text.width() + 1);
        line.push(' ');
        line.push_str(&paint(cell.style, &cell.text, use_color));
        line.push_str(&" ".repeat(fill));
        line.push_str(&bar);
    }
    line.push('\n');
    line
}

/// Renders command messages with one color per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
