//! Report header metadata: reporting period and company code

use crate::types::{Cell, Grid, ReportMetadata};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Label preceding the period date
pub const PERIOD_LABEL: &str = "Período:";

/// Cells after the label that may hold the date
const PERIOD_LOOKAHEAD: usize = 3;

const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2}/[0-9]{2}/[0-9]{4})").expect("date pattern is valid"));

/// Read both header values from the grid
pub fn extract_metadata(grid: &Grid) -> ReportMetadata {
    let metadata = ReportMetadata {
        period: extract_period(grid),
        company_code: extract_company_code(grid),
    };
    debug!(
        period = %metadata.period,
        company_code = %metadata.company_code,
        "Extracted report metadata"
    );
    metadata
}

/// Find the first `Período:` label (row-major) followed within three cells by
/// a valid dd/mm/yyyy date. Returns an empty string when nothing matches.
pub fn extract_period(grid: &Grid) -> String {
    for row in grid.rows() {
        for (col, cell) in row.iter().enumerate() {
            if cell.is_empty() || cell.to_string().trim() != PERIOD_LABEL {
                continue;
            }

            let end = (col + 1 + PERIOD_LOOKAHEAD).min(row.len());
            for candidate in &row[col + 1..end] {
                if let Some(date) = parse_period_date(candidate) {
                    return date;
                }
            }
        }
    }
    String::new()
}

/// First dd/mm/yyyy substring of a cell, if it is a real calendar date
fn parse_period_date(cell: &Cell) -> Option<String> {
    if cell.is_empty() {
        return None;
    }
    let text = cell.to_string();
    let found = DATE_PATTERN.captures(text.trim())?;
    let date = NaiveDate::parse_from_str(&found[1], DATE_FORMAT).ok()?;
    Some(date.format(DATE_FORMAT).to_string())
}

/// Company code from cell A2: numbers are truncated to an integer, text is trimmed
pub fn extract_company_code(grid: &Grid) -> String {
    match grid.get(1, 0) {
        Some(Cell::Number(n)) if n.is_finite() => format!("{}", n.trunc() as i64),
        Some(Cell::Text(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Cell>>) -> Grid {
        Grid::new(rows)
    }

    #[test]
    fn test_period_two_columns_after_label() {
        let g = grid(vec![
            vec![Cell::text("Relatório")],
            vec![
                Cell::Empty,
                Cell::text("Período:"),
                Cell::Empty,
                Cell::text("15/03/2024 extra text"),
            ],
        ]);
        assert_eq!(extract_period(&g), "15/03/2024");
    }

    #[test]
    fn test_period_missing_label() {
        let g = grid(vec![vec![Cell::text("Periodo"), Cell::text("15/03/2024")]]);
        assert_eq!(extract_period(&g), "");
    }

    #[test]
    fn test_period_label_is_trimmed() {
        let g = grid(vec![vec![Cell::text("  Período:  "), Cell::text("01/02/2023")]]);
        assert_eq!(extract_period(&g), "01/02/2023");
    }

    #[test]
    fn test_period_beyond_lookahead_is_ignored() {
        let g = grid(vec![vec![
            Cell::text("Período:"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::text("15/03/2024"),
        ]]);
        assert_eq!(extract_period(&g), "");
    }

    #[test]
    fn test_period_skips_invalid_dates() {
        let g = grid(vec![vec![
            Cell::text("Período:"),
            Cell::text("31/02/2024"),
            Cell::text("a 29/02/2024 a 31/03/2024"),
        ]]);
        assert_eq!(extract_period(&g), "29/02/2024");
    }

    #[test]
    fn test_period_first_label_wins() {
        let g = grid(vec![
            vec![Cell::text("Período:"), Cell::text("01/01/2024")],
            vec![Cell::text("Período:"), Cell::text("01/06/2024")],
        ]);
        assert_eq!(extract_period(&g), "01/01/2024");
    }

    #[test]
    fn test_period_later_label_when_first_has_no_date() {
        let g = grid(vec![
            vec![Cell::text("Período:"), Cell::text("sem data")],
            vec![Cell::text("Período:"), Cell::text("01/06/2024")],
        ]);
        assert_eq!(extract_period(&g), "01/06/2024");
    }

    #[test]
    fn test_company_code_number() {
        let g = grid(vec![vec![Cell::Empty], vec![Cell::Number(5.0)]]);
        assert_eq!(extract_company_code(&g), "5");
    }

    #[test]
    fn test_company_code_text() {
        let g = grid(vec![vec![Cell::Empty], vec![Cell::text("  0042 ")]]);
        assert_eq!(extract_company_code(&g), "0042");
    }

    #[test]
    fn test_company_code_absent() {
        assert_eq!(extract_company_code(&grid(vec![vec![Cell::Number(5.0)]])), "");
        assert_eq!(
            extract_company_code(&grid(vec![vec![Cell::Empty], vec![Cell::Empty]])),
            ""
        );
    }
}
