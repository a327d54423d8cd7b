//! Warning sink for build-time missing-value notifications.
//!
//! The builder never logs directly; it notifies an injected observer so
//! embedders can route warnings wherever they like. Warnings are
//! side-effecting notifications only — execution continues and the
//! instance is still returned.

use tracing::warn;

/// Receives the two warn-class notifications the builder can emit.
pub trait BuildObserver {
    /// The class attribute is missing under a `Warn` class policy.
    fn class_missing(&mut self, attribute: &str);

    /// A non-class attribute is missing under a `Warn` attribute policy.
    /// `attribute` names the first missing one in index order.
    fn attribute_missing(&mut self, attribute: &str);
}

impl<T: BuildObserver + ?Sized> BuildObserver for &mut T {
    fn class_missing(&mut self, attribute: &str) {
        (**self).class_missing(attribute);
    }

    fn attribute_missing(&mut self, attribute: &str) {
        (**self).attribute_missing(attribute);
    }
}

/// Default observer: emits structured `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn class_missing(&mut self, attribute: &str) {
        warn!(attribute = %attribute, "class attribute is missing");
    }

    fn attribute_missing(&mut self, attribute: &str) {
        warn!(attribute = %attribute, "attribute is missing");
    }
}

/// Observer that records notifications, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub missing_classes: Vec<String>,
    pub missing_attributes: Vec<String>,
}

impl BuildObserver for RecordingObserver {
    fn class_missing(&mut self, attribute: &str) {
        self.missing_classes.push(attribute.to_string());
    }

    fn attribute_missing(&mut self, attribute: &str) {
        self.missing_attributes.push(attribute.to_string());
    }
}
