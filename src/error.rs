//! Structured error types for pivotview.
//!
//! Most bad input degrades to empty geometry. The variants here cover the
//! few cases that are rejected outright.

use crate::types::Axis;

/// All errors that can occur while configuring or laying out a sheet.
#[derive(Debug, thiserror::Error)]
pub enum PivotviewError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Leading and trailing frozen counts overlap on one axis.
    #[error(
        "frozen {axis} counts overlap: {leading} leading + {trailing} trailing > {total} total"
    )]
    FrozenOverlap {
        axis: Axis,
        leading: usize,
        trailing: usize,
        total: usize,
    },

    /// Configuration that cannot be interpreted.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PivotviewError>;

impl From<String> for PivotviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PivotviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PivotviewError> for wasm_bindgen::JsValue {
    fn from(e: PivotviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_overlap_message() {
        let err = PivotviewError::FrozenOverlap {
            axis: Axis::Col,
            leading: 3,
            trailing: 3,
            total: 5,
        };
        assert_eq!(
            err.to_string(),
            "frozen column counts overlap: 3 leading + 3 trailing > 5 total"
        );
    }
}
