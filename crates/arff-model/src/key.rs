//! Key traits mapping caller-defined enums onto schema positions.

/// Identifies one attribute of a schema by its ordinal position.
///
/// Implementors are closed, ordered enumerations; the ordinal of a key is
/// its index into the schema's attribute array. `COUNT` must equal the
/// schema's attribute count — the builder checks this once at
/// construction, never per access.
pub trait AttributeKey: Copy {
    /// Cardinality of the key enumeration.
    const COUNT: usize;

    /// Position of this key in the schema's attribute array.
    fn ordinal(self) -> usize;
}

/// A label of a nominal attribute, encoded by its ordinal position in the
/// attribute's declared value list.
pub trait NominalLabel: Copy {
    fn ordinal(self) -> usize;
}

/// Booleans are two-valued nominals with declared order `[true, false]`.
impl NominalLabel for bool {
    fn ordinal(self) -> usize {
        if self { 0 } else { 1 }
    }
}
