use thiserror::Error;

/// Upper bound for theta and orientation angles in radians, as fixed by the
/// protocol schema. The range is symmetric around zero.
pub const THETA_LIMIT: f64 = 3.14159265359;

/// Upper bound for allowedDeviationTheta. The schema pins this to a slightly
/// different rounding of pi than the theta fields.
pub const DEVIATION_THETA_LIMIT: f64 = 3.141592654;

/// A field of an otherwise well-formed message violates one of the documented
/// range or non-negativity constraints. The message must not be transmitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: value {value} must not be negative")]
    Negative { field: String, value: f64 },
    #[error("{field}: value {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field}: trajectory degree must be at least 1, got {degree}")]
    DegreeTooSmall { field: String, degree: u32 },
    #[error("{field}: knot vector has {actual} entries, expected controlPoints + degree + 1 = {expected}")]
    KnotVectorMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
    #[error("nodes: an order must contain at least one node")]
    EmptyNodes,
    #[error("{field}: edge references node \"{node_id}\" which is not part of the order")]
    UnknownNodeReference { field: String, node_id: String },
}

/// Wire input could not be turned into a valid message: the payload is not
/// well-formed JSON, a required field is missing or has the wrong type, an
/// enum string is outside its defined set, or a decoded field violates a
/// range constraint.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed message payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_range(
    field: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn check_theta(field: &str, value: f64) -> Result<(), ValidationError> {
    check_range(field, value, -THETA_LIMIT, THETA_LIMIT)
}
