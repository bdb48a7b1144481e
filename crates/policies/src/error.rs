use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid policy parameters: {0}")]
    InvalidParameters(String),
}
