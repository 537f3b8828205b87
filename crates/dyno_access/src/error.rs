use dyno_value::{Value, ValueKind};
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An error returned from a failed path operation.
///
/// Every traversal error names `pos`, the 0-based index of the path element
/// that triggered it. A failed operation never mutates the tree.
///
/// # Examples
///
/// ```
/// use dyno_access::{AccessError, get, path};
/// use dyno_value::Value;
///
/// let sl = Value::seq([Value::from(1), "two".into(), 3.3.into()]);
/// let err = get(&sl, &path![4]).unwrap_err();
///
/// assert_eq!(err, AccessError::IndexOutOfRange { index: 4, pos: 0 });
/// assert_eq!(err.to_string(), "index out of range: 4 (path element idx: 0)");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// A mapping lookup found no entry for `key`.
    #[error("missing key: {key} (path element idx: {pos})")]
    MissingKey { key: Value, pos: usize },

    /// A sequence index is negative or not below the sequence length.
    #[error("index out of range: {index} (path element idx: {pos})")]
    IndexOutOfRange { index: i64, pos: usize },

    /// The value the path element was applied to is a scalar.
    #[error("expected map or sequence node, got: {actual} (path element idx: {pos})")]
    NotIndexable { actual: ValueKind, pos: usize },

    /// The path element has the wrong kind for the container, such as a
    /// non-string key for a string-keyed map or a non-int sequence index.
    #[error("expected {expected} path element, got: {actual} (path element idx: {pos})")]
    KeyTypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
        pos: usize,
    },

    /// The value an append targets is not a sequence.
    #[error("expected sequence node, got: {actual} (path element idx: {pos})")]
    NotASequence { actual: ValueKind, pos: usize },

    /// A typed accessor found a value of another kind.
    #[error("type mismatch: expected {expected}, got: {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A mutating operation was given no path elements.
    #[error("path cannot be empty")]
    EmptyPath,
}

/// The fieldless category of an [`AccessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessErrorKind {
    MissingKey,
    IndexOutOfRange,
    NotIndexable,
    KeyTypeMismatch,
    NotASequence,
    TypeMismatch,
    EmptyPath,
}

impl AccessError {
    /// Returns the category of this error, without its payload.
    pub fn kind(&self) -> AccessErrorKind {
        match self {
            Self::MissingKey { .. } => AccessErrorKind::MissingKey,
            Self::IndexOutOfRange { .. } => AccessErrorKind::IndexOutOfRange,
            Self::NotIndexable { .. } => AccessErrorKind::NotIndexable,
            Self::KeyTypeMismatch { .. } => AccessErrorKind::KeyTypeMismatch,
            Self::NotASequence { .. } => AccessErrorKind::NotASequence,
            Self::TypeMismatch { .. } => AccessErrorKind::TypeMismatch,
            Self::EmptyPath => AccessErrorKind::EmptyPath,
        }
    }

    /// Returns the index of the path element that failed, if the error
    /// came from traversal.
    pub fn position(&self) -> Option<usize> {
        match *self {
            Self::MissingKey { pos, .. }
            | Self::IndexOutOfRange { pos, .. }
            | Self::NotIndexable { pos, .. }
            | Self::KeyTypeMismatch { pos, .. }
            | Self::NotASequence { pos, .. } => Some(pos),
            Self::TypeMismatch { .. } | Self::EmptyPath => None,
        }
    }
}
