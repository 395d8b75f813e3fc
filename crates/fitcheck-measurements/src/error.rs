use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("measurement record is not a JSON object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
