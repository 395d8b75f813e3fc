use std::env;
use std::path::PathBuf;

use axum::http::HeaderValue;
use fitcheck_standards::Standards;
use tower_http::cors::{Any, CorsLayer};

/// Service settings read from the environment at cold start.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// JSON standards document replacing the built-in tables.
    pub standards_path: Option<PathBuf>,
    /// Origin of the browser front end. Any origin when unset.
    pub allowed_origin: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            standards_path: non_empty("FITCHECK_STANDARDS_PATH").map(PathBuf::from),
            allowed_origin: non_empty("FITCHECK_ALLOWED_ORIGIN"),
        }
    }

    pub fn load_standards(&self) -> eyre::Result<Standards> {
        let Some(path) = &self.standards_path else {
            tracing::info!("using built-in standards");
            return Ok(Standards::builtin().clone());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read standards at {}: {e}", path.display()))?;
        let standards = fitcheck_standards::document::load_standards(&contents)?;
        tracing::info!(path = %path.display(), "using standards document");
        Ok(standards)
    }

    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        match &self.allowed_origin {
            Some(origin) => {
                let origin: HeaderValue = origin
                    .parse()
                    .map_err(|e| eyre::eyre!("invalid FITCHECK_ALLOWED_ORIGIN {origin:?}: {e}"))?;
                Ok(cors.allow_origin(origin))
            }
            None => Ok(cors.allow_origin(Any)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_standards() {
        let config = ServiceConfig::default();
        let standards = config.load_standards().unwrap();
        assert_eq!(&standards, Standards::builtin());
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn missing_standards_file_is_an_error() {
        let config = ServiceConfig {
            standards_path: Some(PathBuf::from("/nonexistent/standards.json")),
            allowed_origin: None,
        };
        let err = config.load_standards().unwrap_err();
        assert!(err.to_string().contains("failed to read standards"));
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = ServiceConfig {
            standards_path: None,
            allowed_origin: Some("https://fit.example\n".to_string()),
        };
        assert!(config.cors_layer().is_err());
    }
}
