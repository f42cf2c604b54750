// Validation errors raised by document entities

/// Errors raised when a document entity rejects a value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("BPM must be between {min} and {max}, got {value}")]
    TempoOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Invalid time signature {numerator}/{denominator}")]
    InvalidTimeSignature { numerator: u8, denominator: u8 },

    #[error("Time position must be finite and >= 0, got {0}")]
    InvalidTime(f64),

    #[error("Speed multiplier must be finite, got {0}")]
    InvalidSpeed(f64),

    #[error("Note width must be finite and > 0, got {0}")]
    InvalidWidth(f32),

    #[error("Event is a {actual} change, not a {expected} change")]
    EventKindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{0} cannot be empty")]
    EmptyName(&'static str),
}

/// Result type for entity validation
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Check a time position in beats
pub(crate) fn validate_time(time: f64) -> DocumentResult<f64> {
    if time.is_finite() && time >= 0.0 {
        Ok(time)
    } else {
        Err(DocumentError::InvalidTime(time))
    }
}

/// Check a user-visible name
pub(crate) fn validate_name(what: &'static str, name: String) -> DocumentResult<String> {
    if name.trim().is_empty() {
        Err(DocumentError::EmptyName(what))
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_time() {
        assert_eq!(validate_time(0.0), Ok(0.0));
        assert_eq!(validate_time(12.5), Ok(12.5));
        assert!(validate_time(-0.25).is_err());
        assert!(validate_time(f64::NAN).is_err());
        assert!(validate_time(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DocumentError::EventKindMismatch {
            expected: "tempo",
            actual: "marker",
        };
        assert_eq!(err.to_string(), "Event is a marker change, not a tempo change");
        assert_eq!(
            DocumentError::EmptyName("Layer name").to_string(),
            "Layer name cannot be empty"
        );
    }
}
