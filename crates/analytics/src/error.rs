use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidData(String),

    #[error("Invalid analysis options: {0}")]
    InvalidOptions(String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}
