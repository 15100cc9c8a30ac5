//! JSON snapshot of the configuration a run attempted to apply

use crate::schema::{Catalog, FieldSpec, PipelineSpec};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Document written by [`export_config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigExport {
    pub timestamp: String,
    pub workspace_id: String,
    pub contact_fields: Vec<FieldSpec>,
    pub deal_fields: Vec<FieldSpec>,
    pub pipeline: PipelineSpec,
}

impl ConfigExport {
    pub fn new(catalog: &Catalog, workspace_id: &str, generated_at: DateTime<Local>) -> Self {
        Self {
            timestamp: generated_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            workspace_id: workspace_id.to_string(),
            contact_fields: catalog.contact_fields.clone(),
            deal_fields: catalog.deal_fields.clone(),
            pipeline: catalog.pipeline.clone(),
        }
    }
}

/// `twenty_crm_config_<YYYYMMDD_HHMMSS>.json`
pub fn export_file_name(generated_at: DateTime<Local>) -> String {
    format!(
        "twenty_crm_config_{}.json",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Write the catalog to a timestamped file in `dir` and return its path
///
/// The file is written in place; an interrupted write leaves a partial file.
pub fn export_config(
    dir: &Path,
    catalog: &Catalog,
    workspace_id: &str,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let document = ConfigExport::new(catalog, workspace_id, generated_at);
    let path = dir.join(export_file_name(generated_at));

    let content = serde_json::to_string_pretty(&document)
        .context("Failed to serialize configuration export")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write configuration export: {:?}", path))?;

    info!("Exported configuration to {:?}", path);
    Ok(path)
}

/// Read an export back
pub fn load_export(path: &Path) -> Result<ConfigExport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration export: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse configuration export: {:?}", path))
}
