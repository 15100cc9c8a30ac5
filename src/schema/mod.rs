//! Typed model of the CRM configuration: custom fields per object and the deal pipeline

pub mod field;
pub mod pipeline;

pub use field::{DefaultValue, FieldSpec, FieldType, ObjectType};
pub use pipeline::{PipelineSpec, Stage};

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// The full configuration applied to a workspace
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub contact_fields: Vec<FieldSpec>,
    pub deal_fields: Vec<FieldSpec>,
    pub pipeline: PipelineSpec,
}

/// A broken invariant in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateField { object: ObjectType, name: String },
    MissingOptions { object: ObjectType, name: String },
    UnexpectedOptions { object: ObjectType, name: String },
    ProbabilityOutOfRange { stage: String, probability: u8 },
    InvalidColor { stage: String, color: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { object, name } => {
                write!(f, "{} field '{}' is declared more than once", object, name)
            }
            Self::MissingOptions { object, name } => {
                write!(f, "{} field '{}' is a choice field without options", object, name)
            }
            Self::UnexpectedOptions { object, name } => {
                write!(f, "{} field '{}' has options but is not a choice field", object, name)
            }
            Self::ProbabilityOutOfRange { stage, probability } => {
                write!(f, "stage '{}' has probability {} (expected 0-100)", stage, probability)
            }
            Self::InvalidColor { stage, color } => {
                write!(f, "stage '{}' has invalid colour '{}'", stage, color)
            }
        }
    }
}

impl Catalog {
    /// Fields declared for an object type
    pub fn fields(&self, object: ObjectType) -> &[FieldSpec] {
        match object {
            ObjectType::Contact => &self.contact_fields,
            ObjectType::Deal => &self.deal_fields,
        }
    }

    /// Collect every invariant violation; an empty list means the catalog is sound
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for object in [ObjectType::Contact, ObjectType::Deal] {
            let mut seen = HashSet::new();
            for field in self.fields(object) {
                if !seen.insert(field.name.as_str()) {
                    issues.push(CatalogIssue::DuplicateField {
                        object,
                        name: field.name.clone(),
                    });
                }

                let has_options = field.options.as_ref().is_some_and(|o| !o.is_empty());
                if field.field_type.is_choice() && !has_options {
                    issues.push(CatalogIssue::MissingOptions {
                        object,
                        name: field.name.clone(),
                    });
                } else if !field.field_type.is_choice() && field.options.is_some() {
                    issues.push(CatalogIssue::UnexpectedOptions {
                        object,
                        name: field.name.clone(),
                    });
                }
            }
        }

        for stage in &self.pipeline.stages {
            if stage.probability > 100 {
                issues.push(CatalogIssue::ProbabilityOutOfRange {
                    stage: stage.name.clone(),
                    probability: stage.probability,
                });
            }
            if !HEX_COLOR.is_match(&stage.color) {
                issues.push(CatalogIssue::InvalidColor {
                    stage: stage.name.clone(),
                    color: stage.color.clone(),
                });
            }
        }

        issues
    }
}
