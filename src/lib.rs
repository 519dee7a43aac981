//! Apuração - timesheet report summarizer
//!
//! Reads a semi-structured timesheet spreadsheet ("apuração"), finds each
//! employee block, sums the minutes recorded under a fixed set of
//! absence/overtime codes and writes a per-employee CSV summary.
//!
//! # Pipeline
//!
//! - Load the first worksheet as an untyped grid ([`excel::GridLoader`])
//! - Extract the reporting period and company code ([`core::metadata`])
//! - Scan rows for employee blocks and code entries ([`core::aggregator`])
//! - Format totals as `HH:MM` and write the CSV ([`writer`])
//!
//! # Example
//!
//! ```no_run
//! use apuracao::cli::build_report;
//! use apuracao::excel::GridLoader;
//!
//! let grid = GridLoader::new("apuracao.xlsx").load()?;
//! let report = build_report(&grid);
//!
//! println!("Period: {}", report.metadata.period);
//! println!("Employees: {}", report.rows.len());
//! # Ok::<(), apuracao::error::ApuracaoError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ApuracaoError, ApuracaoResult};
pub use types::{Aggregation, Cell, EmployeeRecord, Grid, OutputRow, ReportMetadata, TimeCode};
