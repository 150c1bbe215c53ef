use console::Style;
use once_cell::sync::Lazy;

/// Styles for the listings table.
pub struct TableTheme {
    headers: Vec<Style>,
    pub rank: Style,
    pub yes: Style,
    pub no: Style,
    pub missing: Style,
    pub text: Style,
    pub border: Style,
}

impl TableTheme {
    /// Header colors cycle through the palette, one per column.
    pub fn header(&self, column: usize) -> &Style {
        &self.headers[column % self.headers.len()]
    }
}

pub static TABLE_THEME: Lazy<TableTheme> = Lazy::new(|| TableTheme {
    headers: vec![
        Style::new().blue(),
        Style::new().green(),
        Style::new().yellow(),
        Style::new().cyan(),
        Style::new().magenta(),
    ],
    rank: Style::new().color256(245),
    yes: Style::new().green(),
    no: Style::new().red(),
    missing: Style::new().color256(245),
    text: Style::new().white(),
    border: Style::new().color256(240),
});
