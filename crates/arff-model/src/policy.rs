//! Missing-value policies applied when an instance is built.

use serde::{Deserialize, Serialize};

/// How to respond to a missing value at build time.
///
/// Two independent policies exist, one for the class attribute and one for
/// the remaining attributes. Both default to [`MissingPolicy::Ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Don't check at all; the instance is returned as-is.
    #[default]
    Ignore,
    /// Notify the observer, then continue and return the instance.
    Warn,
    /// Fail the build with a typed error naming the missing attribute.
    Fail,
}
