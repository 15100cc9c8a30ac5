use crate::api::CrmApi;
use crate::schema::PipelineSpec;
use crate::ui::output;
use log::{info, warn};

/// Create the pipeline and all its stages in one request
pub async fn provision_pipeline(api: &dyn CrmApi, pipeline: &PipelineSpec) -> bool {
    output::section("SETTING UP DEAL PIPELINE");
    info!(
        "Provisioning pipeline '{}' with {} stages",
        pipeline.name,
        pipeline.stage_count()
    );

    output::progress(&format!("Creating pipeline: {}", pipeline.name));
    let result = api.create_pipeline(pipeline).await;

    match result.error_message() {
        None => {
            output::ok();
            true
        }
        Some(error) => {
            output::failed(error);
            warn!("Pipeline '{}' failed: {}", pipeline.name, error);
            false
        }
    }
}
