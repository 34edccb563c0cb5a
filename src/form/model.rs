use async_trait::async_trait;
use futures::future::join_all;
use std::collections::BTreeMap;
use tracing::debug;

use super::field::{FieldName, FormValues, Framework};
use super::rules::FieldRules;

/// Owner of field values and per-field validation state.
///
/// The wizard only ever asks whether a set of fields is valid and, on
/// submission, for the full value record. Error messages stay here for the
/// presentation layer to read.
#[async_trait]
pub trait FormModel: Send + Sync {
    /// Validate the named fields, recording or clearing each field's error.
    /// Resolves to `true` iff every named field passes.
    async fn validate(&mut self, fields: &[FieldName]) -> bool;

    fn values(&self) -> FormValues;

    fn error(&self, field: FieldName) -> Option<&str>;
}

/// The newsletter sign-up form
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    values: FormValues,
    rules: FieldRules,
    errors: BTreeMap<FieldName, String>,
}

impl NewsletterForm {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            values: FormValues::default(),
            rules,
            errors: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> &FormValues {
        &self.values
    }

    /// Replace the text of a free-text field. Ignored for the framework field.
    pub fn set_text(&mut self, field: FieldName, value: &str) {
        if let Some(slot) = self.values.text_mut(field) {
            slot.clear();
            slot.push_str(value);
            self.revalidate_if_flagged(field);
        }
    }

    pub fn set_framework(&mut self, framework: Framework) {
        self.values.framework = Some(framework);
        self.revalidate_if_flagged(FieldName::Framework);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Fields currently carrying an error, in declaration order
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }

    // A field already showing an error is checked again on every edit so the
    // message disappears as soon as the value is fixed.
    fn revalidate_if_flagged(&mut self, field: FieldName) {
        if self.errors.contains_key(&field) {
            self.apply(field, self.rules.check(field, &self.values));
        }
    }

    fn apply(&mut self, field: FieldName, outcome: Result<(), String>) -> bool {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(message) => {
                debug!(?field, %message, "field failed validation");
                self.errors.insert(field, message);
                false
            }
        }
    }
}

#[async_trait]
impl FormModel for NewsletterForm {
    async fn validate(&mut self, fields: &[FieldName]) -> bool {
        // Every named field is checked, even after the first failure, so all
        // messages show at once.
        let checks = fields.iter().map(|&field| {
            let rules = &self.rules;
            let values = &self.values;
            async move { (field, rules.check(field, values)) }
        });
        let outcomes = join_all(checks).await;

        let mut all_valid = true;
        for (field, outcome) in outcomes {
            all_valid &= self.apply(field, outcome);
        }
        all_valid
    }

    fn values(&self) -> FormValues {
        self.values.clone()
    }

    fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
