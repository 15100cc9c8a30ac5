use crate::api::CrmApi;
use crate::schema::{FieldSpec, ObjectType};
use crate::ui::output;
use log::{info, warn};
use serde::Serialize;

/// A field the CRM refused to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedField {
    pub name: String,
    pub label: String,
    pub error: String,
}

/// Per-object tally of a field provisioning batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldBatchReport {
    pub object: ObjectType,
    pub created: Vec<String>,
    pub failed: Vec<FailedField>,
}

impl FieldBatchReport {
    fn new(object: ObjectType) -> Self {
        Self {
            object,
            created: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn success_count(&self) -> usize {
        self.created.len()
    }

    pub fn error_count(&self) -> usize {
        self.failed.len()
    }

    pub fn attempted(&self) -> usize {
        self.success_count() + self.error_count()
    }

    /// `(success_count, error_count)`
    pub fn counts(&self) -> (usize, usize) {
        (self.success_count(), self.error_count())
    }
}

/// Create every field in order; a failure is recorded and the batch moves on
pub async fn provision_fields(
    api: &dyn CrmApi,
    object: ObjectType,
    fields: &[FieldSpec],
) -> FieldBatchReport {
    output::section(&format!(
        "SETTING UP {} CUSTOM FIELDS",
        object.as_str().to_uppercase()
    ));
    info!("Provisioning {} {} fields", fields.len(), object);

    let mut report = FieldBatchReport::new(object);

    for field in fields {
        output::progress(&format!("Creating field: {} ({})", field.label, field.name));
        let result = api.create_field(object, field).await;

        match result.error_message() {
            None => {
                output::ok();
                report.created.push(field.name.clone());
            }
            Some(error) => {
                output::failed(error);
                warn!("{} field '{}' failed: {}", object, field.name, error);
                report.failed.push(FailedField {
                    name: field.name.clone(),
                    label: field.label.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    println!();
    output::success(&format!(
        "{} fields: {} created, {} errors",
        object.display_name(),
        report.success_count(),
        report.error_count()
    ));

    report
}
