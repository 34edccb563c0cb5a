use crate::form::FieldName;

/// One screen of the wizard: the fields shown together and validated before
/// moving past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub fields: Vec<FieldName>,
}

impl StepDefinition {
    pub fn new(fields: impl Into<Vec<FieldName>>) -> Self {
        Self {
            fields: fields.into(),
        }
    }
}

/// The three newsletter steps: name, framework, email
pub fn newsletter_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new([FieldName::FirstName, FieldName::LastName]),
        StepDefinition::new([FieldName::Framework]),
        StepDefinition::new([FieldName::Email]),
    ]
}

/// Every distinct field across the given steps, in step order
pub fn all_fields(steps: &[StepDefinition]) -> Vec<FieldName> {
    let mut fields = Vec::new();
    for field in steps.iter().flat_map(|step| step.fields.iter()) {
        if !fields.contains(field) {
            fields.push(*field);
        }
    }
    fields
}
