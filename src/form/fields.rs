use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Mobile,
    Terms,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Mobile, FieldId::Terms];

    fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Mobile => 2,
            FieldId::Terms => 3,
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_REGISTRY[self.index()]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().key)
    }
}

/// Static binding of a field to its label and error text.
#[derive(Debug)]
pub struct FieldSpec {
    pub id: FieldId,
    pub key: &'static str,
    pub label: &'static str,
    pub error_message: &'static str,
}

pub static FIELD_REGISTRY: [FieldSpec; 4] = [
    FieldSpec {
        id: FieldId::Name,
        key: "name",
        label: "Full Name",
        error_message: "Please enter a valid name (at least 2 characters)",
    },
    FieldSpec {
        id: FieldId::Email,
        key: "email",
        label: "Email Address",
        error_message: "Please enter a valid email address",
    },
    FieldSpec {
        id: FieldId::Mobile,
        key: "mobile",
        label: "Mobile Number",
        error_message: "Please enter a valid 10-digit mobile number",
    },
    FieldSpec {
        id: FieldId::Terms,
        key: "terms",
        label: "I agree to receive course updates",
        error_message: "Please accept the terms to continue",
    },
];

/// Raw value coming from a control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Style class plus inline error label of one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    pub status: FieldStatus,
    pub message: String,
    pub show: bool,
}

impl Annotation {
    pub fn mark_success(&mut self) {
        self.status = FieldStatus::Success;
        self.message.clear();
        self.show = false;
    }

    pub fn mark_error(&mut self, message: &str) {
        self.status = FieldStatus::Error;
        self.message = message.to_string();
        self.show = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub terms: bool,
    annotations: [Annotation; 4],
}

impl FormFields {
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Name => FieldValue::Text(self.name.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Mobile => FieldValue::Text(self.mobile.clone()),
            FieldId::Terms => FieldValue::Checked(self.terms),
        }
    }

    /// Writes a value into the matching control. Mismatched kinds are ignored.
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        match (field, value) {
            (FieldId::Name, FieldValue::Text(v)) => self.name = v,
            (FieldId::Email, FieldValue::Text(v)) => self.email = v,
            (FieldId::Mobile, FieldValue::Text(v)) => self.mobile = v,
            (FieldId::Terms, FieldValue::Checked(v)) => self.terms = v,
            (field, value) => {
                tracing::debug!("Ignoring {:?} for field {}", value, field);
            }
        }
    }

    pub fn annotation(&self, field: FieldId) -> &Annotation {
        &self.annotations[field.index()]
    }

    pub fn annotation_mut(&mut self, field: FieldId) -> &mut Annotation {
        &mut self.annotations[field.index()]
    }

    pub fn clear_annotations(&mut self) {
        self.annotations = Default::default();
    }

    /// Empties every control and annotation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
