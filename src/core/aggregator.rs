//! Employee/code aggregation over the report rows
//!
//! The report interleaves one employee header row with any number of detail
//! rows. An employee header sets the "current" employee, which then receives
//! every detail row until the next header. Both checks run independently on
//! each row, so a header row can carry a code entry of its own.

use crate::core::duration::{is_time_like, parse_minutes};
use crate::types::{Aggregation, Cell, EmployeeRecord, Grid, ReportMetadata, TimeCode};
use tracing::{debug, trace};

/// Smallest value accepted as a matrícula; lower numbers are header noise
pub const MIN_EMPLOYEE_ID: i64 = 100_000;

const ID_COL: usize = 0;
const NAME_COL: usize = 1;
const CODE_COL: usize = 6;
const FIRST_TIME_COL: usize = 7;

/// Scan every row of the grid and sum minutes per employee and code
pub fn aggregate(grid: &Grid, metadata: &ReportMetadata) -> Aggregation {
    let mut aggregation = Aggregation::new();
    let mut current: Option<String> = None;

    for (row_idx, row) in grid.rows().enumerate() {
        if let Some((id, name)) = detect_employee(row) {
            match aggregation.get_mut(&id) {
                Some(record) => {
                    debug!(row = row_idx, id = %id, "Employee seen again, refreshing name");
                    record.name = name;
                }
                None => {
                    debug!(row = row_idx, id = %id, name = %name, "New employee");
                    aggregation.insert(EmployeeRecord::new(id.clone(), name, metadata));
                }
            }
            current = Some(id);
        }

        let Some(id) = current.as_deref() else {
            continue;
        };

        let Some((code, minutes)) = detect_code_entry(row) else {
            continue;
        };

        if let Some(record) = aggregation.get_mut(id) {
            debug!(row = row_idx, id = %id, code = %code, minutes, "Accumulating entry");
            record.totals.add(code, minutes);
        }
    }

    aggregation
}

/// Employee header check: numeric id ≥ [`MIN_EMPLOYEE_ID`] in column 0 and a
/// non-blank name in column 1. Returns the zero-padded id and trimmed name.
pub fn detect_employee(row: &[Cell]) -> Option<(String, String)> {
    let id = parse_employee_id(row.get(ID_COL)?)?;
    if id < MIN_EMPLOYEE_ID {
        trace!(id, "Ignoring id below threshold");
        return None;
    }

    let name = row.get(NAME_COL)?.as_text()?.trim();
    if name.is_empty() {
        return None;
    }

    Some((format!("{:06}", id), name.to_string()))
}

/// Integer part of a cell's text, ignoring anything after the first '.'
fn parse_employee_id(cell: &Cell) -> Option<i64> {
    if cell.is_empty() {
        return None;
    }
    let text = cell.to_string();
    let integral = text.split('.').next().unwrap_or_default().trim();
    integral.parse::<i64>().ok()
}

/// Detail row check: a known code in column 6 and a time-like cell somewhere
/// from column 7 on. When several cells look like times the rightmost wins.
pub fn detect_code_entry(row: &[Cell]) -> Option<(TimeCode, i64)> {
    let cell = row.get(CODE_COL)?;
    if cell.is_empty() {
        return None;
    }
    let code = TimeCode::parse(cell.to_string().trim())?;

    let time_cell = row
        .get(FIRST_TIME_COL..)?
        .iter()
        .rev()
        .find(|c| is_time_like(c))?;

    Some((code, parse_minutes(time_cell)))
}
