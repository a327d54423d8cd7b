//! Error types for schema and instance construction.

use thiserror::Error;

use crate::attribute::ValueKind;

/// Errors raised while constructing or building an instance.
#[derive(Debug, Error)]
pub enum ArffError {
    /// The key enumeration does not cover the schema's attribute array.
    #[error("schema declares {declared} attributes but the key type covers {keys}")]
    SchemaWidthMismatch { declared: usize, keys: usize },

    /// Attribute index outside the schema's attribute array.
    #[error("attribute index {index} out of range ({count} declared)")]
    UnknownAttribute { index: usize, count: usize },

    /// A setter was called on an attribute of a different declared kind.
    #[error("'{attribute}' is not a {supplied} attribute (declared {expected})")]
    KindMismatch {
        attribute: String,
        expected: ValueKind,
        supplied: ValueKind,
    },

    /// A nominal label's ordinal exceeds the attribute's declared values.
    #[error("label ordinal {ordinal} out of range for '{attribute}' ({cardinality} values)")]
    NominalOutOfRange {
        attribute: String,
        ordinal: usize,
        cardinality: usize,
    },

    /// The class attribute is missing and the class policy is `Fail`.
    #[error("class attribute '{attribute}' is missing")]
    ClassMissing { attribute: String },

    /// A non-class attribute is missing and the attribute policy is `Fail`.
    #[error("attribute '{attribute}' is missing")]
    AttributeMissing { attribute: String },
}

pub type Result<T> = std::result::Result<T, ArffError>;
