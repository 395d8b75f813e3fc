use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandardsError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid band #{index} in {table} table: {reason}")]
    InvalidBand {
        table: &'static str,
        index: usize,
        reason: String,
    },

    #[error("standards document version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("standards document is not a JSON object")]
    NotAnObject,
}
