//! Build errors for machine builders and configuration.

use crate::core::Rejection;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Price not specified. Call .price(units) before .build()")]
    MissingPrice,

    #[error("Invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Catalog rejected the configuration: {0}")]
    Rejected(#[from] Rejection),

    #[error("Malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single configuration problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("price of '{id}' must be positive")]
    ZeroPrice { id: String },

    #[error("item id must not be blank")]
    BlankItemId,

    #[error("item '{id}' is listed more than once")]
    DuplicateItem { id: String },

    #[error("history limit must be positive")]
    ZeroHistoryLimit,
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_lists_every_violation() {
        let error = BuildError::InvalidConfig(vec![
            ConfigViolation::BlankItemId,
            ConfigViolation::ZeroHistoryLimit,
        ]);
        assert_eq!(
            error.to_string(),
            "Invalid configuration: item id must not be blank; history limit must be positive"
        );
    }
}
