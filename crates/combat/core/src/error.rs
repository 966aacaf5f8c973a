//! Error infrastructure for combat-core.
//!
//! Only precondition violations are errors here. "No modifier applies" or a
//! multiplier sitting exactly at the baseline are ordinary results and are
//! reported through the normal return values.

use crate::flags::ObjectFlag;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: drawing from an empty mask, too many pvals on one object
    Validation,

    /// Programmer error: the caller broke a documented precondition.
    ///
    /// Examples: out-of-range flag index, modifier flag with no table entry
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Errors raised by registry lookups, modifier selection and cache setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A raw flag index fell outside the flag space.
    #[error("flag index {index} is outside the flag space [0, {max})")]
    InvalidFlag { index: usize, max: usize },

    /// An object flag has no slay/brand definition.
    #[error("no modifier definition for object flag `{0}`")]
    UnknownModifier(ObjectFlag),

    /// A random modifier was requested from a mask with no candidates.
    #[error("cannot draw a modifier from an empty selection mask")]
    EmptySelectionMask,

    /// A combination cache was configured without buckets.
    #[error("combination cache needs at least one bucket")]
    InvalidBucketCount,

    /// An object ran out of distinct pval slots.
    #[error("object already carries {max} distinct pvals")]
    PvalOverflow { max: usize },
}

impl CombatError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidFlag { .. } | Self::UnknownModifier(_) | Self::InvalidBucketCount => {
                ErrorSeverity::Internal
            }
            Self::EmptySelectionMask | Self::PvalOverflow { .. } => ErrorSeverity::Validation,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFlag { .. } => "INVALID_FLAG",
            Self::UnknownModifier(_) => "UNKNOWN_MODIFIER",
            Self::EmptySelectionMask => "EMPTY_SELECTION_MASK",
            Self::InvalidBucketCount => "INVALID_BUCKET_COUNT",
            Self::PvalOverflow { .. } => "PVAL_OVERFLOW",
        }
    }
}

/// Result alias for combat-core operations.
pub type CombatResult<T> = Result<T, CombatError>;
