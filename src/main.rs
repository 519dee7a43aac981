use apuracao::cli;
use apuracao::error::ApuracaoResult;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apuracao")]
#[command(about = "Summarize an apuração timesheet report into a per-employee CSV")]
#[command(long_about = "Apuração - timesheet report summarizer

Reads the first sheet of a timesheet report, finds every employee block
(matrícula in column A, name in column B) and sums the minutes recorded
under codes 303, 304, 505, 506, 511 and 512.

OUTPUT:
  apuracao_tratada_<YYYYMMDD>_<HHMMSS>.csv (UTF-8 with BOM)
  Columns: matricula, nome, 303, 304, 505, 506, 511, 512
  Values: HH:MM, or empty when no time was recorded

EXAMPLES:
  apuracao                          # Reads ./apuracao.xlsx
  apuracao relatorio.xlsx -o saida  # Custom input and output directory
  apuracao -v                       # Print a summary after writing

Logging goes to stderr; set RUST_LOG=apuracao=debug for row-level detail.")]
#[command(version)]
struct Cli {
    /// Path to the report workbook (.xlsx, .xls, .xlsb, .ods)
    #[arg(default_value = cli::DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory where the CSV is written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print period, company and per-code totals after writing
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ApuracaoResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apuracao=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    cli::generate(cli.input, cli.output_dir, cli.verbose)?;
    Ok(())
}
