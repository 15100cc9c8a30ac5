//! Custom field definitions for Twenty CRM objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field types understood by the Twenty metadata API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Select,
    MultiSelect,
    Number,
    Text,
    LongText,
    Checkbox,
    Phone,
    Datetime,
    Currency,
}

impl FieldType {
    /// Whether this type carries a list of options
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

/// CRM object a custom field is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Contact,
    Deal,
}

impl ObjectType {
    /// Path segment used by the metadata endpoint
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Deal => "deal",
        }
    }

    /// Capitalized name for console output
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Deal => "Deal",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial value of a field: text for selects, numbers, or a checkbox state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// A single custom field to create on an object
///
/// Serializes to the request body of `POST /metadata/objects/{object}/fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FieldSpec {
    /// Start a field of the given type with no optional attributes set
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            description: None,
            options: None,
            required: false,
            default_value: None,
            min: None,
            max: None,
            currency: None,
            suffix: None,
        }
    }

    /// Single-choice field
    pub fn select(name: impl Into<String>, label: impl Into<String>, options: &[&str]) -> Self {
        Self::new(name, FieldType::Select, label).options(options)
    }

    /// Multiple-choice field
    pub fn multi_select(name: impl Into<String>, label: impl Into<String>, options: &[&str]) -> Self {
        Self::new(name, FieldType::MultiSelect, label).options(options)
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text, label)
    }

    pub fn long_text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::LongText, label)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number, label)
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::Checkbox, label)
    }

    pub fn phone(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::Phone, label)
    }

    pub fn datetime(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, FieldType::Datetime, label)
    }

    /// Monetary field in the given ISO currency
    pub fn currency(name: impl Into<String>, label: impl Into<String>, currency: &str) -> Self {
        let mut field = Self::new(name, FieldType::Currency, label);
        field.currency = Some(currency.to_string());
        field
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Inclusive numeric bounds
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}
