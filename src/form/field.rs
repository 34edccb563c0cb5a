use serde::Serialize;

/// Identifier for each field of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Framework,
    Email,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Framework,
        FieldName::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Framework => "Your preferred JS framework",
            FieldName::Email => "Your email",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::FirstName => "Your first name",
            FieldName::LastName => "Your last name",
            FieldName::Framework => "Select framework",
            FieldName::Email => "Your email",
        }
    }

    /// Whether the field is edited as free text (as opposed to picked from a list)
    pub fn is_text(&self) -> bool {
        !matches!(self, FieldName::Framework)
    }
}

/// Frameworks offered by the framework picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Svelte,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::Svelte => "Svelte",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of every field value, handed to the submission handler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub framework: Option<Framework>,
    pub email: String,
}

impl FormValues {
    /// Text content of a free-text field; `None` for the framework picker
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::Email => Some(&self.email),
            FieldName::Framework => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Framework => None,
        }
    }

    /// Render as the JSON record printed after a successful sign-up
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
