//! Error types for the richdoc library.

use crate::model::NodeKind;
use thiserror::Error;

/// Result type alias for richdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or mutating a document tree.
///
/// Both variants are raised synchronously at the point of violation and
/// leave the target node unchanged: a failed `set` does not touch the
/// properties mapping and a failed `append` does not touch the content
/// sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A property key outside the node kind's valid-key set was set or read.
    #[error("Invalid {kind} property: {key:?}")]
    InvalidProperty {
        /// Kind of the node that rejected the key.
        kind: NodeKind,
        /// The offending key.
        key: String,
    },

    /// An appended item matched neither the declared child type nor any
    /// recursive single-item wrapping of it.
    #[error("Wrong content type for {kind}: {actual} ({value})")]
    WrongContentType {
        /// Kind of the node the item was appended to.
        kind: NodeKind,
        /// Type name of the rejected item.
        actual: &'static str,
        /// Short display of the rejected value, for diagnostics.
        value: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidProperty`] for `kind` and `key`.
    pub(crate) fn invalid_property(kind: NodeKind, key: impl Into<String>) -> Self {
        Error::InvalidProperty {
            kind,
            key: key.into(),
        }
    }
}
