//! Data model for ARFF-style dataset instance construction.
//!
//! This crate defines the schema side of instance building: attribute
//! descriptors and their value kinds, the [`Schema`] an instance is bound
//! to, the [`Instance`] representation itself with its missing-value
//! sentinel, the missing-value policies applied at build time, and the
//! error taxonomy shared across the workspace.

pub mod attribute;
pub mod error;
pub mod instance;
pub mod key;
pub mod policy;
pub mod schema;

pub use attribute::{Attribute, ValueKind};
pub use error::{ArffError, Result};
pub use instance::Instance;
pub use key::{AttributeKey, NominalLabel};
pub use policy::MissingPolicy;
pub use schema::Schema;
