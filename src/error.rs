use thiserror::Error;

pub type ApuracaoResult<T> = Result<T, ApuracaoError>;

#[derive(Error, Debug)]
pub enum ApuracaoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
