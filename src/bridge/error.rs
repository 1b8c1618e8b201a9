//! Bridge error definitions.

use thiserror::Error;

/// Reasons a bridge request is rejected. Both surface as 400.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// `target` is absent, empty, or whitespace only.
    #[error("target parameter is required")]
    MissingTarget,

    /// `target` does not parse as an absolute URI.
    #[error("target is not a valid absolute URI: {0}")]
    MalformedTarget(#[source] url::ParseError),
}

impl BridgeError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::MissingTarget => "missing_target",
            BridgeError::MalformedTarget(_) => "malformed_target",
        }
    }
}
