//! Per-form value and error state.
//!
//! [`FormState`] owns a form's current values and its per-field errors.
//! The value keys are fixed by the schema at construction; edits to
//! unknown field names are ignored, which keeps the error map a subset
//! of the value map at all times.

use std::collections::{BTreeMap, HashMap};

use crate::rules::FormSchema;

/// The state of one form instance: schema, values, and errors.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: FormSchema,
    values: BTreeMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormState {
    /// Creates fresh state for the given schema, every field empty.
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect();
        Self {
            schema,
            values,
            errors: HashMap::new(),
        }
    }

    /// Returns the schema this state was built from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The field change handler: stores the value and clears the field's
    /// prior error, if any. No validation happens here.
    ///
    /// Edits to field names the schema does not define are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if !self.schema.has_field(name) {
            return;
        }
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    /// Binds submitted data to the form, field by field.
    ///
    /// Every schema field is set from `data`, defaulting to empty when
    /// absent; keys in `data` outside the schema are ignored.
    pub fn bind(&mut self, data: &HashMap<String, String>) {
        for name in self
            .schema
            .fields()
            .iter()
            .map(|f| f.name.clone())
            .collect::<Vec<_>>()
        {
            let value = data.get(&name).cloned().unwrap_or_default();
            self.set_value(&name, value);
        }
    }

    /// Fully recomputes the error map from the rule set.
    ///
    /// Returns `true` iff no field reports an error.
    pub fn validate(&mut self) -> bool {
        self.errors = self.schema.validate(&self.values);
        self.errors.is_empty()
    }

    /// Resets every value to the empty string and clears all errors.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.errors.clear();
    }

    /// Returns the current value of a field ("" for unknown names).
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Returns the field's current error message, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Returns the full value map.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns the full error map.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Returns `true` if every value is empty.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
