//! CSV report writer
//!
//! Output is UTF-8 with a byte-order mark, comma separated, with a header row:
//! `matricula,nome,303,304,505,506,511,512`.

use crate::core::format_minutes;
use crate::error::ApuracaoResult;
use crate::types::{Aggregation, EmployeeRecord, OutputRow, TimeCode};
use chrono::NaiveDateTime;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// UTF-8 byte-order mark expected by spreadsheet apps opening the CSV
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column header line
pub const HEADER: [&str; 8] = ["matricula", "nome", "303", "304", "505", "506", "511", "512"];

impl From<&EmployeeRecord> for OutputRow {
    fn from(record: &EmployeeRecord) -> Self {
        let fmt = |code: TimeCode| format_minutes(record.totals.get(code));
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            c303: fmt(TimeCode::C303),
            c304: fmt(TimeCode::C304),
            c505: fmt(TimeCode::C505),
            c506: fmt(TimeCode::C506),
            c511: fmt(TimeCode::C511),
            c512: fmt(TimeCode::C512),
        }
    }
}

/// Project every record to an output row, sorted by matrícula string
pub fn to_output_rows(aggregation: &Aggregation) -> Vec<OutputRow> {
    let mut rows: Vec<OutputRow> = aggregation.records().iter().map(OutputRow::from).collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    rows
}

/// Write BOM, header and rows to any sink
pub fn write_csv<W: Write>(mut sink: W, rows: &[OutputRow]) -> ApuracaoResult<()> {
    sink.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `apuracao_tratada_<YYYYMMDD>_<HHMMSS>.csv`
pub fn output_file_name(timestamp: NaiveDateTime) -> String {
    format!("apuracao_tratada_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write the CSV to a temporary file in `dir` and rename it into place once
/// complete. On failure the temporary file is removed and no report exists.
pub fn write_report_file(
    dir: &Path,
    rows: &[OutputRow],
    timestamp: NaiveDateTime,
) -> ApuracaoResult<PathBuf> {
    let path = dir.join(output_file_name(timestamp));

    let mut temp = NamedTempFile::new_in(dir)?;
    write_csv(BufWriter::new(temp.as_file_mut()), rows)?;
    temp.as_file().sync_all()?;
    temp.persist(&path).map_err(|e| e.error)?;

    info!(path = %path.display(), rows = rows.len(), "Wrote CSV report");
    Ok(path)
}
