//! Schema-validated instance construction.
//!
//! An [`InstanceBuilder`] is bound to a schema and a designated class
//! attribute, accumulates typed values into one in-progress instance, and
//! applies configurable missing-value policies when the instance is built.
//! Kind mismatches between a setter and an attribute's declared kind fail
//! immediately; missing values at build time are ignored, warned about, or
//! failed on per the caller's policy choice.
//!
//! # Example
//!
//! ```
//! use arff_core::{Attribute, AttributeKey, InstanceBuilder, NominalLabel, Schema};
//!
//! #[derive(Clone, Copy)]
//! enum Vital {
//!     Age,
//!     Smoker,
//!     City,
//! }
//!
//! impl AttributeKey for Vital {
//!     const COUNT: usize = 3;
//!     fn ordinal(self) -> usize {
//!         self as usize
//!     }
//! }
//!
//! #[derive(Clone, Copy)]
//! enum Risk {
//!     Low,
//!     Medium,
//!     High,
//! }
//!
//! impl NominalLabel for Risk {
//!     fn ordinal(self) -> usize {
//!         self as usize
//!     }
//! }
//!
//! let schema = Schema::new(
//!     vec![
//!         Attribute::numeric("AGE"),
//!         Attribute::boolean("SMOKER"),
//!         Attribute::text("CITY"),
//!     ],
//!     Attribute::nominal("RISK", ["low", "medium", "high"]),
//! );
//!
//! let mut builder = InstanceBuilder::for_nominal_class(&schema)?;
//! builder
//!     .set_f64(Vital::Age, Some(47.0))?
//!     .set_bool(Vital::Smoker, Some(false))?
//!     .set_text(Vital::City, Some("Utrecht"))?
//!     .set_class(&Risk::Medium)?;
//! let instance = builder.build()?;
//!
//! assert_eq!(instance.value(Vital::Age.ordinal()), Some(47.0));
//! assert_eq!(instance.class_value(), Some(1.0));
//! # Ok::<(), arff_core::ArffError>(())
//! ```

pub mod builder;
pub mod observer;

pub use builder::InstanceBuilder;
pub use observer::{BuildObserver, RecordingObserver, TracingObserver};

// Re-export the model surface so embedders need a single import path.
pub use arff_model::{
    ArffError, Attribute, AttributeKey, Instance, MissingPolicy, NominalLabel, Result, Schema,
    ValueKind,
};
