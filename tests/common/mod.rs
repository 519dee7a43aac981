//! Shared helpers: build report workbooks on disk

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// A cell value to place in the generated sheet
pub enum Value {
    Text(&'static str),
    Number(f64),
    /// Minutes stored as an Excel time serial with an `hh:mm` format
    Time(u32),
    /// Minutes stored as an Excel duration with a `[h]:mm` format
    Duration(u32),
}

/// Write `cells` (row, col, value) to the first sheet of a new workbook
pub fn write_workbook(path: &Path, cells: &[(u32, u16, Value)]) {
    let mut workbook = Workbook::new();
    let time_format = Format::new().set_num_format("hh:mm");
    let duration_format = Format::new().set_num_format("[h]:mm");
    let sheet = workbook.add_worksheet();

    for (row, col, value) in cells {
        match value {
            Value::Text(s) => {
                sheet.write_string(*row, *col, *s).unwrap();
            }
            Value::Number(n) => {
                sheet.write_number(*row, *col, *n).unwrap();
            }
            Value::Time(minutes) => {
                sheet
                    .write_number_with_format(*row, *col, *minutes as f64 / 1440.0, &time_format)
                    .unwrap();
            }
            Value::Duration(minutes) => {
                sheet
                    .write_number_with_format(
                        *row,
                        *col,
                        *minutes as f64 / 1440.0,
                        &duration_format,
                    )
                    .unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// A small report in the usual layout: title, company code in A2, the
/// period label, then two employee blocks with detail rows
pub fn sample_report(path: &Path) {
    use Value::*;
    write_workbook(
        path,
        &[
            (0, 0, Text("Apuração de Horas")),
            (1, 0, Number(5.0)),
            (1, 1, Text("EMPRESA EXEMPLO LTDA")),
            (2, 4, Text("Período:")),
            (2, 6, Text("01/03/2024 a 31/03/2024")),
            (4, 0, Text("Cadastro")),
            (4, 1, Text("Nome")),
            (4, 6, Text("Código")),
            (4, 9, Text("Horas")),
            // Second employee first, to check sorting
            (5, 0, Number(100002.0)),
            (5, 1, Text("  Bia Souza ")),
            (6, 6, Number(505.0)),
            (6, 9, Text("2:30")),
            (7, 6, Text("999")),
            (7, 9, Text("5:00")),
            (8, 0, Number(100001.0)),
            (8, 1, Text("Ana Lima")),
            (9, 6, Text("303")),
            (9, 7, Text("08:00")),
            (9, 9, Text("1:00")),
            (10, 6, Text("303")),
            (10, 9, Time(30)),
            (11, 6, Text("512")),
            (11, 9, Duration(25 * 60)),
            // Ana again, renamed; totals must carry over
            (12, 0, Number(100001.0)),
            (12, 1, Text("Ana Lima Santos")),
            (13, 6, Text("304")),
            (13, 9, Text("01:35:00.002000")),
        ],
    );
}
