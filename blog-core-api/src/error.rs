use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Value cannot be null: {0}")]
    NullArgument(&'static str),

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Argument out of range {name}: {reason}")]
    OutOfRange { name: &'static str, reason: String },

    #[error("Blog post {0} is already published")]
    AlreadyPublished(Uuid),

    #[error("'{value}' is not a valid {description} in BlogPostStatus")]
    UnknownStatus {
        value: String,
        description: &'static str,
    },
}

impl DomainError {
    /// Error for a scalar argument that must not be negative.
    pub fn negative(name: &'static str, value: i64) -> Self {
        DomainError::OutOfRange {
            name,
            reason: format!("{name} cannot be negative. Actual value: {value}"),
        }
    }

    /// Error for a pair of arguments where `lower` must not exceed `upper`.
    pub fn out_of_order(lower: &'static str, upper: &'static str) -> Self {
        DomainError::OutOfRange {
            name: lower,
            reason: format!("{lower} must be less than or equal to {upper}"),
        }
    }

    /// Returns the name of the offending parameter, if the error carries one.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            DomainError::NullArgument(name) => Some(*name),
            DomainError::InvalidArgument { name, .. } => Some(*name),
            DomainError::OutOfRange { name, .. } => Some(*name),
            DomainError::AlreadyPublished(_) | DomainError::UnknownStatus { .. } => None,
        }
    }

    pub fn is_range_violation(&self) -> bool {
        matches!(self, DomainError::OutOfRange { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DomainError::NullArgument(_) | DomainError::InvalidArgument { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
