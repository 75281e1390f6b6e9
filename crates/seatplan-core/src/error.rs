#[derive(Debug, thiserror::Error)]
pub enum SeatplanError {
    #[error("required column '{column}' not found in guest list header")]
    MissingColumn { column: &'static str },

    #[error("guest list has no header row")]
    EmptyInput,

    #[error("failed to read guest list: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write workbook: {0}")]
    Workbook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
