use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TITLE: &str = "Location Check-in";

/// Kind of input a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Tel,
    Email,
    Number,
    Date,
    Textarea,
    /// Anything an override names that we have no dedicated input for.
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Value for the `type` attribute of an `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
            Self::Text | Self::Textarea | Self::Other => "text",
        }
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

/// One input of the check-in form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldSpec {
    pub id: String,
    #[serde(rename = "type", default)]
    #[schema(value_type = String, example = "text")]
    pub kind: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    pub fn new(id: &str, kind: FieldType, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            kind,
            label: label.to_string(),
            required,
        }
    }

    /// Label shown to the user; falls back to the id for unlabeled fields.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Form metadata: what to render and where submissions go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormConfig {
    pub title: String,
    /// Webhook target. Empty when not configured.
    pub gas_url: String,
    pub fields: Vec<FieldSpec>,
}

impl FormConfig {
    /// The built-in check-in form, posting to `gas_url`.
    pub fn default_with_url(gas_url: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            gas_url: gas_url.into(),
            fields: vec![
                FieldSpec::new("name", FieldType::Text, "Name", true),
                FieldSpec::new("phone", FieldType::Tel, "Phone Number", true),
                FieldSpec::new("notes", FieldType::Textarea, "Additional Notes", false),
            ],
        }
    }
}
