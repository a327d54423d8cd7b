//! Schema context an instance is bound to.
//!
//! A [`Schema`] owns the ordered attribute array plus the designated class
//! attribute, and the per-attribute string pools that back text interning.
//! Builders hold a shared reference and never mutate the schema itself;
//! interning is the one shared mutable resource and is guarded per pool.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::attribute::Attribute;
use crate::error::{ArffError, Result};

/// An ordered attribute array with a reserved class attribute.
#[derive(Debug)]
pub struct Schema {
    attributes: Vec<Attribute>,
    class_attribute: Attribute,
    pools: Vec<Mutex<StringPool>>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>, class_attribute: Attribute) -> Self {
        let pools = attributes.iter().map(|_| Mutex::default()).collect();
        Schema {
            attributes,
            class_attribute,
            pools,
        }
    }

    /// Number of non-class attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Instance width: attribute count plus the class slot.
    #[must_use]
    pub fn width(&self) -> usize {
        self.attributes.len() + 1
    }

    /// The descriptor at `index`, if in range.
    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn class_attribute(&self) -> &Attribute {
        &self.class_attribute
    }

    /// Intern `text` into the pool of the attribute at `index`, returning
    /// its stable pool index. Repeated interning of the same text yields
    /// the same index.
    pub fn intern(&self, index: usize, text: &str) -> Result<usize> {
        let pool = self
            .pools
            .get(index)
            .ok_or(ArffError::UnknownAttribute {
                index,
                count: self.attributes.len(),
            })?;
        let mut pool = pool.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(pool.intern(text))
    }

    /// Snapshot of the interned values for the attribute at `index`, in
    /// pool order.
    pub fn interned_values(&self, index: usize) -> Result<Vec<String>> {
        let pool = self
            .pools
            .get(index)
            .ok_or(ArffError::UnknownAttribute {
                index,
                count: self.attributes.len(),
            })?;
        let pool = pool.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(pool.entries.clone())
    }
}

/// Append-only pool of distinct strings, addressed by insertion order.
#[derive(Debug, Default)]
struct StringPool {
    entries: Vec<String>,
    index: HashMap<String, usize>,
}

impl StringPool {
    fn intern(&mut self, text: &str) -> usize {
        if let Some(&existing) = self.index.get(text) {
            return existing;
        }
        let next = self.entries.len();
        self.entries.push(text.to_string());
        self.index.insert(text.to_string(), next);
        next
    }
}
