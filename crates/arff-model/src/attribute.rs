//! Attribute descriptors.
//!
//! An [`Attribute`] declares one column of a schema: its name, its value
//! kind, and (for nominal attributes) the closed list of declared values.
//! Descriptors are immutable once constructed; builders only read them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value kind an attribute declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Floating-point, integer, and other numeric values, stored as `f64`.
    Numeric,
    /// Two-valued nominal with declared order `[true, false]`.
    Boolean,
    /// Free-form text, interned into the schema's string pool.
    Text,
    /// A closed set of declared values, stored by ordinal.
    Nominal,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Numeric => "numeric",
            ValueKind::Boolean => "boolean",
            ValueKind::Text => "text",
            ValueKind::Nominal => "nominal",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One declared column of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: ValueKind,
    /// Declared values for `Nominal` (and `Boolean`) attributes; empty for
    /// the other kinds.
    #[serde(default)]
    pub values: Vec<String>,
}

impl Attribute {
    /// A numeric attribute.
    pub fn numeric(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: ValueKind::Numeric,
            values: Vec::new(),
        }
    }

    /// A boolean attribute. The declared value order is `[true, false]`,
    /// so `true` encodes as index 0 and `false` as index 1.
    pub fn boolean(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: ValueKind::Boolean,
            values: vec!["true".to_string(), "false".to_string()],
        }
    }

    /// A text attribute whose values are interned on assignment.
    pub fn text(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: ValueKind::Text,
            values: Vec::new(),
        }
    }

    /// A nominal attribute with a closed, ordered value list.
    pub fn nominal(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Attribute {
            name: name.into(),
            kind: ValueKind::Nominal,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of declared values. Zero for numeric and text attributes.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }
}
