//! Remote creation of custom fields and the deal pipeline

pub mod fields;
pub mod pipeline;

pub use fields::{provision_fields, FailedField, FieldBatchReport};
pub use pipeline::provision_pipeline;
