use thiserror::Error;

use crate::math::ShapeError;

/// Recoverable failures reported by the array operations.
///
/// Precondition violations that have no sensible result (second max of a
/// sequence without two distinct values, maximum of an empty sequence) are
/// panics instead and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Null reference: {0}")]
    NullReference(String),
}

impl ArrayError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ArrayError::InvalidArgument(msg.into())
    }

    pub fn null(msg: impl Into<String>) -> Self {
        ArrayError::NullReference(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArrayError::InvalidArgument(_))
    }

    pub fn is_null_reference(&self) -> bool {
        matches!(self, ArrayError::NullReference(_))
    }
}

impl From<ShapeError> for ArrayError {
    fn from(err: ShapeError) -> Self {
        ArrayError::InvalidArgument(err.to_string())
    }
}

pub type ArrayResult<T> = Result<T, ArrayError>;
