//! Twenty CRM REST API access
//!
//! [`CrmApi`] is the seam between the provisioning flow and the network:
//! [`TwentyClient`] implements it over `reqwest`, tests substitute an
//! in-memory double.

pub mod client;
pub mod constants;
pub mod result;

pub use client::TwentyClient;
pub use result::ProvisioningResult;

use crate::schema::{FieldSpec, ObjectType, PipelineSpec};
use async_trait::async_trait;

/// Operations the provisioning flow needs from the CRM
#[async_trait]
pub trait CrmApi: Send + Sync {
    /// Read the workspace to prove the credentials work
    async fn verify_connection(&self) -> anyhow::Result<()>;

    /// Create one custom field on an object type
    async fn create_field(&self, object: ObjectType, field: &FieldSpec) -> ProvisioningResult;

    /// Create a pipeline with all of its stages in a single request
    async fn create_pipeline(&self, pipeline: &PipelineSpec) -> ProvisioningResult;
}
