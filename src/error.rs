//! Error type for the ingestion boundary and options construction.
//!
//! The core operations (distance, route distance, segmentation, simplification)
//! never fail; malformed geodata flows through them. Errors only surface when a
//! raw ping is turned into a typed point or when options are built.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },
    #[error("invalid {field}: {value} (must be finite and greater than zero)")]
    InvalidConfig { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, TrackError>;

/// Reject NaN, infinities, zero and negatives for a tuning parameter.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("tolerance", 0.5), Ok(0.5));
        assert!(require_positive("tolerance", 0.0).is_err());
        assert!(require_positive("tolerance", -1.0).is_err());
        assert!(require_positive("tolerance", f64::NAN).is_err());
        assert!(require_positive("tolerance", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = TrackError::InvalidConfig {
            field: "stop_threshold_minutes",
            value: -5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("stop_threshold_minutes"));
        assert!(msg.contains("-5"));

        let err = TrackError::InvalidTimestamp {
            value: "yesterday".to_string(),
            reason: "unparsable".to_string(),
        };
        assert!(err.to_string().contains("\"yesterday\""));
    }
}
