use thiserror::Error;

use crate::value::Kind;

/// Specific kinds of errors that can occur when building dynamic values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildErrorKind {
    #[error("list elements must share one kind: got {actual:?} after {expected:?}")]
    MixedElementKinds { expected: Kind, actual: Kind },

    #[error("map keys must share one kind: got {actual:?} after {expected:?}")]
    MixedKeyKinds { expected: Kind, actual: Kind },

    #[error("map key kind {0:?} is not scalar")]
    NonScalarKey(Kind),

    #[error("duplicate map key")]
    DuplicateMapKey,
}

/// Error type returned when constructing a dynamic list, map, or message
/// fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("build error: {kind}")]
pub struct BuildError {
    /// The specific kind of build error that occurred.
    kind: BuildErrorKind,
}

impl BuildError {
    /// Creates a new BuildError with the given kind.
    pub const fn new(kind: BuildErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the specific kind of build error that occurred.
    pub fn kind(&self) -> &BuildErrorKind {
        &self.kind
    }
}

/// Result type for dynamic construction.
pub type BuildResult<T> = Result<T, BuildError>;
