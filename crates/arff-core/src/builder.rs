//! The instance builder.

use std::marker::PhantomData;

use arff_model::{
    ArffError, Attribute, AttributeKey, Instance, MissingPolicy, NominalLabel, Result, Schema,
    ValueKind,
};

use crate::observer::{BuildObserver, TracingObserver};

/// Accumulates typed values into one in-progress [`Instance`] bound to a
/// schema.
///
/// `K` is the caller's attribute key enumeration; `C` is the caller's
/// class value representation, mapped onto the class slot by the encoder
/// strategy supplied at construction. Setters validate the attribute's
/// declared kind before writing and return the builder for chaining; a
/// kind mismatch is a programmer error and fails immediately without
/// mutating the instance.
///
/// [`build`](Self::build) consumes the builder, so a finished (or
/// rejected) builder cannot be reused.
pub struct InstanceBuilder<'a, K, C> {
    schema: &'a Schema,
    instance: Instance,
    encode_class: Box<dyn Fn(&C) -> Result<f64> + 'a>,
    class_policy: MissingPolicy,
    attribute_policy: MissingPolicy,
    observer: Box<dyn BuildObserver + 'a>,
    key: PhantomData<K>,
}

impl<'a, K: AttributeKey, C> InstanceBuilder<'a, K, C> {
    /// Bind a new builder to `schema` with a class encoder strategy.
    ///
    /// Every slot of the in-progress instance starts missing. Fails with
    /// [`ArffError::SchemaWidthMismatch`] if the key enumeration's
    /// cardinality differs from the schema's attribute count; this is
    /// checked once here, never per setter call.
    pub fn new(
        schema: &'a Schema,
        encode_class: impl Fn(&C) -> Result<f64> + 'a,
    ) -> Result<Self> {
        if K::COUNT != schema.attribute_count() {
            return Err(ArffError::SchemaWidthMismatch {
                declared: schema.attribute_count(),
                keys: K::COUNT,
            });
        }
        Ok(InstanceBuilder {
            schema,
            instance: Instance::new(schema.width()),
            encode_class: Box::new(encode_class),
            class_policy: MissingPolicy::default(),
            attribute_policy: MissingPolicy::default(),
            observer: Box::new(TracingObserver),
            key: PhantomData,
        })
    }

    /// Replace the warning observer. The default logs through `tracing`.
    pub fn with_observer(mut self, observer: impl BuildObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Policy for a missing non-class attribute at build time.
    pub fn attribute_missing_policy(&mut self, policy: MissingPolicy) -> &mut Self {
        self.attribute_policy = policy;
        self
    }

    /// Policy for a missing class attribute at build time.
    pub fn class_missing_policy(&mut self, policy: MissingPolicy) -> &mut Self {
        self.class_policy = policy;
        self
    }

    /// The in-progress instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Set a numeric attribute from an `f64`. `None` writes the missing
    /// sentinel, discarding any previous value.
    pub fn set_f64(&mut self, key: K, value: Option<f64>) -> Result<&mut Self> {
        let (index, _) = self.resolve(key, ValueKind::Numeric)?;
        self.instance.set(index, value);
        Ok(self)
    }

    /// Set a numeric attribute from an `f32`.
    pub fn set_f32(&mut self, key: K, value: Option<f32>) -> Result<&mut Self> {
        self.set_f64(key, value.map(f64::from))
    }

    /// Set a numeric attribute from an `i64`.
    pub fn set_i64(&mut self, key: K, value: Option<i64>) -> Result<&mut Self> {
        self.set_f64(key, value.map(|v| v as f64))
    }

    /// Set a boolean attribute. `true` encodes as 0.0 and `false` as 1.0,
    /// the indices of the declared `[true, false]` value order.
    pub fn set_bool(&mut self, key: K, value: Option<bool>) -> Result<&mut Self> {
        let (index, _) = self.resolve(key, ValueKind::Boolean)?;
        let encoded = value.map(|v| if v { 0.0 } else { 1.0 });
        self.instance.set(index, encoded);
        Ok(self)
    }

    /// Set a text attribute. The value is interned through the schema's
    /// string pool and stored as its pool index.
    pub fn set_text(&mut self, key: K, value: Option<&str>) -> Result<&mut Self> {
        let (index, _) = self.resolve(key, ValueKind::Text)?;
        let encoded = match value {
            Some(text) => Some(self.schema.intern(index, text)? as f64),
            None => None,
        };
        self.instance.set(index, encoded);
        Ok(self)
    }

    /// Set a nominal attribute from a label, stored as the label's ordinal
    /// in the attribute's declared value list.
    pub fn set_nominal<L: NominalLabel>(&mut self, key: K, value: Option<L>) -> Result<&mut Self> {
        let (index, attribute) = self.resolve(key, ValueKind::Nominal)?;
        let encoded = match value {
            Some(label) => {
                let ordinal = label.ordinal();
                if ordinal >= attribute.cardinality() {
                    return Err(ArffError::NominalOutOfRange {
                        attribute: attribute.name.clone(),
                        ordinal,
                        cardinality: attribute.cardinality(),
                    });
                }
                Some(ordinal as f64)
            }
            None => None,
        };
        self.instance.set(index, encoded);
        Ok(self)
    }

    /// Set the class slot through the encoder strategy, marking it present.
    pub fn set_class(&mut self, value: &C) -> Result<&mut Self> {
        let encoded = (self.encode_class)(value)?;
        let class_index = self.instance.class_index();
        self.instance.set(class_index, Some(encoded));
        Ok(self)
    }

    /// Set the instance weight. Not validated.
    pub fn set_weight(&mut self, weight: f64) -> &mut Self {
        self.instance.set_weight(weight);
        self
    }

    /// Overwrite every missing non-class slot with `value`. The class slot
    /// is exempt regardless of its state. Runs against the instance's
    /// current state, so call it before [`build`](Self::build) if the
    /// missing checks should see the repaired values.
    pub fn replace_missing_with(&mut self, value: f64) -> &mut Self {
        self.instance.replace_missing(value);
        self
    }

    /// Run the two missing-value checks and yield the completed instance.
    ///
    /// The class check runs first under the class policy, then the
    /// attribute check under the attribute policy. `Fail` reports the
    /// first missing attribute in index order; `Warn` re-checks whether
    /// any slot at all is missing and, when so, still names the first
    /// missing non-class attribute. The two predicates are evaluated
    /// independently. On failure no instance is returned.
    pub fn build(mut self) -> Result<Instance> {
        match self.class_policy {
            MissingPolicy::Ignore => {}
            MissingPolicy::Fail => {
                if self.instance.class_is_missing() {
                    return Err(ArffError::ClassMissing {
                        attribute: self.schema.class_attribute().name.clone(),
                    });
                }
            }
            MissingPolicy::Warn => {
                if self.instance.class_is_missing() {
                    self.observer
                        .class_missing(&self.schema.class_attribute().name);
                }
            }
        }

        let first_missing = self.instance.first_missing_attribute();
        match self.attribute_policy {
            MissingPolicy::Ignore => {}
            MissingPolicy::Fail => {
                if let Some(index) = first_missing {
                    return Err(ArffError::AttributeMissing {
                        attribute: self.attribute_name(index),
                    });
                }
            }
            MissingPolicy::Warn => {
                // The trigger spans every slot, the class one included;
                // the message still names the first missing attribute.
                if self.instance.has_missing_value()
                    && let Some(index) = first_missing
                {
                    let name = self.attribute_name(index);
                    self.observer.attribute_missing(&name);
                }
            }
        }

        Ok(self.instance)
    }

    fn resolve(&self, key: K, supplied: ValueKind) -> Result<(usize, &'a Attribute)> {
        let schema = self.schema;
        let index = key.ordinal();
        let attribute = schema.attribute(index).ok_or(ArffError::UnknownAttribute {
            index,
            count: schema.attribute_count(),
        })?;
        if attribute.kind != supplied {
            return Err(ArffError::KindMismatch {
                attribute: attribute.name.clone(),
                expected: attribute.kind,
                supplied,
            });
        }
        Ok((index, attribute))
    }

    // Indices handed to this come from the instance scan and are always
    // within the schema's attribute array.
    fn attribute_name(&self, index: usize) -> String {
        self.schema
            .attribute(index)
            .map(|attribute| attribute.name.clone())
            .unwrap_or_default()
    }
}

impl<'a, K: AttributeKey, C: NominalLabel> InstanceBuilder<'a, K, C> {
    /// Bind a builder whose class values are nominal labels, encoded by
    /// ordinal and bounds-checked against the class attribute's declared
    /// value list.
    ///
    /// Fails with [`ArffError::KindMismatch`] if the class attribute is
    /// neither nominal nor boolean.
    pub fn for_nominal_class(schema: &'a Schema) -> Result<Self> {
        let class = schema.class_attribute();
        if !matches!(class.kind, ValueKind::Nominal | ValueKind::Boolean) {
            return Err(ArffError::KindMismatch {
                attribute: class.name.clone(),
                expected: class.kind,
                supplied: ValueKind::Nominal,
            });
        }
        let name = class.name.clone();
        let cardinality = class.cardinality();
        Self::new(schema, move |label: &C| {
            let ordinal = label.ordinal();
            if ordinal >= cardinality {
                return Err(ArffError::NominalOutOfRange {
                    attribute: name.clone(),
                    ordinal,
                    cardinality,
                });
            }
            Ok(ordinal as f64)
        })
    }
}
