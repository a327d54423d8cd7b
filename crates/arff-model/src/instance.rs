//! The instance representation.
//!
//! An [`Instance`] is one row of a dataset: a fixed-width array of value
//! slots plus a weight. The last slot is reserved for the class attribute.
//! A slot holds either an encoded `f64` or nothing — `None` is the missing
//! sentinel, distinct from every valid encoded value.

use serde::{Deserialize, Serialize};

/// A single dataset row of width `attribute_count + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    values: Vec<Option<f64>>,
    class_index: usize,
    weight: f64,
}

impl Instance {
    /// Create an instance of the given width with every slot missing and a
    /// weight of 1.0. The class slot is the last one.
    pub fn new(width: usize) -> Self {
        debug_assert!(width > 0, "instance width includes the class slot");
        Instance {
            values: vec![None; width],
            class_index: width.saturating_sub(1),
            weight: 1.0,
        }
    }

    /// Total number of slots, including the class slot.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Index of the reserved class slot.
    #[must_use]
    pub fn class_index(&self) -> usize {
        self.class_index
    }

    /// The encoded value at `index`, or `None` if missing or out of range.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Overwrite the slot at `index`. Passing `None` writes the missing
    /// sentinel, discarding any previous value. Out-of-range indices are
    /// ignored; the builder resolves indices before writing.
    pub fn set(&mut self, index: usize, value: Option<f64>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Whether the slot at `index` is missing.
    pub fn is_missing(&self, index: usize) -> bool {
        self.value(index).is_none()
    }

    /// The encoded class value, if present.
    pub fn class_value(&self) -> Option<f64> {
        self.value(self.class_index)
    }

    /// Whether the class slot is missing.
    pub fn class_is_missing(&self) -> bool {
        self.class_value().is_none()
    }

    /// First missing non-class slot in index order, if any.
    pub fn first_missing_attribute(&self) -> Option<usize> {
        (0..self.values.len())
            .filter(|&index| index != self.class_index)
            .find(|&index| self.values[index].is_none())
    }

    /// Whether any slot is missing. Unlike
    /// [`first_missing_attribute`](Self::first_missing_attribute), this
    /// spans the class slot too.
    pub fn has_missing_value(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }

    /// Overwrite every missing non-class slot with `value`. The class slot
    /// is exempt regardless of its state.
    pub fn replace_missing(&mut self, value: f64) {
        for (index, slot) in self.values.iter_mut().enumerate() {
            if index == self.class_index {
                continue;
            }
            if slot.is_none() {
                *slot = Some(value);
            }
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}
