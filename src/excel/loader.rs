//! Spreadsheet loader - first worksheet → untyped [`Grid`]

use crate::error::{ApuracaoError, ApuracaoResult};
use crate::types::{Cell, Grid};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Duration, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial of 9999-12-31, the last date Excel can represent
const MAX_SERIAL: f64 = 2_958_465.0;

/// Loads the first worksheet of a workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
pub struct GridLoader {
    path: PathBuf,
}

impl GridLoader {
    /// Create a new loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the first sheet; every row is data, there is no header row
    pub fn load(&self) -> ApuracaoResult<Grid> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ApuracaoError::Spreadsheet(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                ApuracaoError::Spreadsheet(format!(
                    "Workbook {} has no worksheets",
                    self.path.display()
                ))
            })?
            .map_err(|e| ApuracaoError::Spreadsheet(format!("Failed to read first sheet: {}", e)))?;

        let grid = range_to_grid(&range);
        info!(
            path = %self.path.display(),
            rows = grid.height(),
            cols = grid.width(),
            "Loaded spreadsheet"
        );
        Ok(grid)
    }
}

/// Place the used range at its absolute position so column 0 is always column A
fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::default();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row];
    for data_row in range.rows() {
        let mut row = vec![Cell::Empty; start_col];
        row.extend(data_row.iter().map(convert_cell));
        rows.push(row);
    }
    Grid::new(rows)
}

/// Map a calamine value onto the three-state cell model
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => render_serial(dt.as_f64(), dt.is_duration())
            .map(Cell::Text)
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Render an Excel serial the way a dataframe stringifies it:
/// durations as `<d> days HH:MM:SS`, times of day as `HH:MM:SS`,
/// and full date-times as `YYYY-MM-DD HH:MM:SS`.
pub fn render_serial(serial: f64, is_duration: bool) -> Option<String> {
    if !serial.is_finite() || !(0.0..=MAX_SERIAL + 1.0).contains(&serial) {
        return None;
    }

    let total_seconds = (serial * SECONDS_PER_DAY).round() as i64;
    let days = total_seconds / 86_400;
    let secs = total_seconds % 86_400;
    let clock = format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);

    if is_duration {
        return Some(format!("{} days {}", days, clock));
    }
    if days == 0 {
        return Some(clock);
    }

    // Serials below 60 precede Excel's phantom 1900-02-29
    let epoch = if days < 60 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = epoch.checked_add_signed(Duration::days(days))?;
    Some(format!("{} {}", date.format("%Y-%m-%d"), clock))
}
