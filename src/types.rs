use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

//==============================================================================
// Grid Model
//==============================================================================

/// A single untyped spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Blank, error or otherwise missing value
    #[default]
    Empty,
    /// Any textual value (strings, rendered dates and durations)
    Text(String),
    /// Any numeric value (ints, floats, booleans as 1/0)
    Number(f64),
}

impl Cell {
    /// Build a text cell
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// True for `Empty` and for NaN numbers
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(n) => n.is_nan(),
            Cell::Text(_) => false,
        }
    }

    /// Text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    /// Integral numbers render without a fractional part (303.0 → "303")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.is_nan() => f.write_str("nan"),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Rectangular, row-major table of cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    /// Build a grid, padding short rows with `Cell::Empty`
    pub fn new(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, col); `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

//==============================================================================
// Time Codes
//==============================================================================

/// Categories of recorded time summed per employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeCode {
    C303,
    C304,
    C505,
    C506,
    C511,
    C512,
}

impl TimeCode {
    /// All codes, in output column order
    pub const ALL: [TimeCode; 6] = [
        TimeCode::C303,
        TimeCode::C304,
        TimeCode::C505,
        TimeCode::C506,
        TimeCode::C511,
        TimeCode::C512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCode::C303 => "303",
            TimeCode::C304 => "304",
            TimeCode::C505 => "505",
            TimeCode::C506 => "506",
            TimeCode::C511 => "511",
            TimeCode::C512 => "512",
        }
    }

    /// Exact match against the literal code text
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated minutes for each time code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeTotals([i64; 6]);

impl CodeTotals {
    pub fn get(&self, code: TimeCode) -> i64 {
        self.0[code.index()]
    }

    /// Saturates at `i64::MAX` instead of overflowing
    pub fn add(&mut self, code: TimeCode, minutes: i64) {
        let slot = &mut self.0[code.index()];
        *slot = slot.saturating_add(minutes);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeCode, i64)> + '_ {
        TimeCode::ALL.into_iter().map(|code| (code, self.get(code)))
    }
}

//==============================================================================
// Employee Records
//==============================================================================

/// Header metadata read once per report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMetadata {
    /// Reporting period as dd/mm/yyyy, empty when not found
    pub period: String,
    /// Company code from cell A2, empty when absent
    pub company_code: String,
}

/// Per-employee aggregation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Zero-padded 6-digit matrícula
    pub id: String,
    pub name: String,
    pub company_code: String,
    pub period: String,
    pub totals: CodeTotals,
}

impl EmployeeRecord {
    pub fn new(id: String, name: String, metadata: &ReportMetadata) -> Self {
        Self {
            id,
            name,
            company_code: metadata.company_code.clone(),
            period: metadata.period.clone(),
            totals: CodeTotals::default(),
        }
    }
}

/// Aggregation result: records in first-seen order, indexed by id
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    records: Vec<EmployeeRecord>,
    index: HashMap<String, usize>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut EmployeeRecord> {
        match self.index.get(id) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    /// Insert a new record; returns false if the id is already present
    pub fn insert(&mut self, record: EmployeeRecord) -> bool {
        if self.index.contains_key(&record.id) {
            return false;
        }
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Minutes per code summed over every employee
    pub fn totals(&self) -> CodeTotals {
        let mut totals = CodeTotals::default();
        for record in &self.records {
            for (code, minutes) in record.totals.iter() {
                totals.add(code, minutes);
            }
        }
        totals
    }
}

//==============================================================================
// Output
//==============================================================================

/// One CSV line; company code and period are deliberately not serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "matricula")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "303")]
    pub c303: String,
    #[serde(rename = "304")]
    pub c304: String,
    #[serde(rename = "505")]
    pub c505: String,
    #[serde(rename = "506")]
    pub c506: String,
    #[serde(rename = "511")]
    pub c511: String,
    #[serde(rename = "512")]
    pub c512: String,
}
