use std::path::PathBuf;
use thiserror::Error;

pub type TimetableResult<T> = Result<T, TimetableError>;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No timetable JSON given (input is empty)")]
    EmptyInput,

    #[error("JSON has no 'days' element")]
    MissingDays,

    #[error("Unexpected timetable shape: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Excel export error: {0}")]
    Export(String),

    #[error("Output file already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
}

impl From<rust_xlsxwriter::XlsxError> for TimetableError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        TimetableError::Export(err.to_string())
    }
}
