use crate::core::{aggregate, extract_metadata, format_minutes};
use crate::error::ApuracaoResult;
use crate::excel::GridLoader;
use crate::types::{Aggregation, Grid, OutputRow, ReportMetadata};
use crate::writer::{to_output_rows, write_report_file};
use chrono::Local;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Default input workbook, read from the working directory
pub const DEFAULT_INPUT: &str = "apuracao.xlsx";

/// Everything extracted from one report
#[derive(Debug, Clone)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub aggregation: Aggregation,
    /// Output rows, sorted by matrícula
    pub rows: Vec<OutputRow>,
}

/// Run metadata extraction and aggregation over a loaded grid
pub fn build_report(grid: &Grid) -> Report {
    let metadata = extract_metadata(grid);
    let aggregation = aggregate(grid, &metadata);
    let rows = to_output_rows(&aggregation);
    info!(employees = rows.len(), "Aggregated report");

    Report {
        metadata,
        aggregation,
        rows,
    }
}

/// Execute the report generation: load, aggregate, write the CSV.
/// Returns the path of the written file.
pub fn generate(input: PathBuf, output_dir: PathBuf, verbose: bool) -> ApuracaoResult<PathBuf> {
    let grid = GridLoader::new(&input).load()?;
    let report = build_report(&grid);
    let path = write_report_file(&output_dir, &report.rows, Local::now().naive_local())?;

    println!("CSV gerado: {}", path.display());

    if verbose {
        print_summary(&input, &report);
    }

    Ok(path)
}

fn display_or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn print_summary(input: &std::path::Path, report: &Report) {
    println!();
    println!("{}", "📋 Resumo da apuração".bold().green());
    println!("   Arquivo:  {}", input.display());
    println!(
        "   Período:  {}",
        display_or_dash(&report.metadata.period).bright_blue()
    );
    println!(
        "   Empresa:  {}",
        display_or_dash(&report.metadata.company_code).bright_blue()
    );
    println!(
        "   Colaboradores: {}",
        report.aggregation.len().to_string().bold()
    );

    println!("\n   {}", "⏱  Totais por código:".cyan());
    for (code, minutes) in report.aggregation.totals().iter() {
        let formatted = format_minutes(minutes);
        println!(
            "      {} = {}",
            code.to_string().bright_blue(),
            display_or_dash(&formatted).bold()
        );
    }
}
