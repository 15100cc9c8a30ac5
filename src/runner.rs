//! The provisioning flow, from credential check to export
//!
//! ```text
//! credentials -> connectivity -> confirmation -> contact fields
//!     -> deal fields -> pipeline -> summary -> export
//! ```
//!
//! Only the first three steps can abort the run, and all of them happen
//! before anything is written to the CRM.

use crate::api::CrmApi;
use crate::config::Settings;
use crate::export::export_config;
use crate::provision::{provision_fields, provision_pipeline, FieldBatchReport};
use crate::schema::{Catalog, ObjectType};
use crate::ui::{is_affirmative, output, Confirmer};
use anyhow::Result;
use colored::Colorize;
use log::{error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a run stopped before provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    MissingCredentials(String),
    ConnectionFailed(String),
    Declined,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials(reason) => write!(f, "Error: {}", reason),
            Self::ConnectionFailed(reason) => write!(f, "API connection failed: {}", reason),
            Self::Declined => write!(f, "Setup cancelled"),
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct SetupSummary {
    pub contact: FieldBatchReport,
    pub deal: FieldBatchReport,
    pub pipeline_created: bool,
    pub export_path: Option<PathBuf>,
    pub export_error: Option<String>,
}

impl SetupSummary {
    pub fn error_count(&self) -> usize {
        self.contact.error_count() + self.deal.error_count() + usize::from(!self.pipeline_created)
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Aborted(AbortReason),
    Completed(SetupSummary),
}

impl Outcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Run the whole flow
///
/// `connect` builds the API client and is only called once credentials are
/// known to be present.
pub async fn run_with<A, F>(
    settings: Result<Settings>,
    connect: F,
    catalog: &Catalog,
    confirmer: &mut dyn Confirmer,
    output_dir: &Path,
) -> Outcome
where
    A: CrmApi,
    F: FnOnce(&Settings) -> Result<A>,
{
    output::banner();

    for issue in catalog.validate() {
        warn!("Catalog issue: {}", issue);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => return abort(AbortReason::MissingCredentials(e.to_string())),
    };

    println!("API URL: {}", settings.api_url);
    println!("Workspace: {}", settings.workspace_id);

    let api = match connect(&settings) {
        Ok(api) => api,
        Err(e) => return abort(AbortReason::ConnectionFailed(format!("{:#}", e))),
    };

    Setup::new(&api, &settings, catalog, output_dir)
        .run(confirmer)
        .await
}

fn abort(reason: AbortReason) -> Outcome {
    error!("Setup aborted: {}", reason);
    match &reason {
        AbortReason::ConnectionFailed(_) => {
            output::error(&reason.to_string());
            println!("\n{} Setup aborted due to connection failure", "✗".red());
        }
        _ => output::error(&reason.to_string()),
    }
    Outcome::Aborted(reason)
}

/// One provisioning run against a connected workspace
pub struct Setup<'a> {
    api: &'a dyn CrmApi,
    settings: &'a Settings,
    catalog: &'a Catalog,
    output_dir: &'a Path,
}

impl<'a> Setup<'a> {
    pub fn new(
        api: &'a dyn CrmApi,
        settings: &'a Settings,
        catalog: &'a Catalog,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            api,
            settings,
            catalog,
            output_dir,
        }
    }

    pub async fn run(&self, confirmer: &mut dyn Confirmer) -> Outcome {
        if let Err(e) = self.api.verify_connection().await {
            return abort(AbortReason::ConnectionFailed(format!("{:#}", e)));
        }
        output::success("API connection verified");

        self.print_plan();
        let confirmed = match confirmer.ask("\nProceed? (yes/no)") {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        };
        if !confirmed {
            return abort(AbortReason::Declined);
        }

        info!("Starting provisioning of workspace {}", self.settings.workspace_id);

        let contact = provision_fields(self.api, ObjectType::Contact, &self.catalog.contact_fields).await;
        let deal = provision_fields(self.api, ObjectType::Deal, &self.catalog.deal_fields).await;
        let pipeline_created = provision_pipeline(self.api, &self.catalog.pipeline).await;

        let mut summary = SetupSummary {
            contact,
            deal,
            pipeline_created,
            export_path: None,
            export_error: None,
        };
        print_summary(&summary);

        match export_config(
            self.output_dir,
            self.catalog,
            &self.settings.workspace_id,
            chrono::Local::now(),
        ) {
            Ok(path) => {
                println!();
                output::success(&format!("Configuration exported to: {}", path.display()));
                summary.export_path = Some(path);
            }
            Err(e) => {
                error!("Export failed: {:#}", e);
                println!();
                output::error(&format!("Configuration export failed: {:#}", e));
                summary.export_error = Some(format!("{:#}", e));
            }
        }

        print_next_steps();
        info!("Setup finished with {} errors", summary.error_count());
        Outcome::Completed(summary)
    }

    fn print_plan(&self) {
        println!("\nThis will create the following:");
        println!("  - {} Contact custom fields", self.catalog.contact_fields.len());
        println!("  - {} Deal custom fields", self.catalog.deal_fields.len());
        println!(
            "  - 1 Deal pipeline with {} stages",
            self.catalog.pipeline.stage_count()
        );
    }
}

fn print_summary(summary: &SetupSummary) {
    output::section("SETUP SUMMARY");
    for report in [&summary.contact, &summary.deal] {
        println!(
            "{} fields: {} created, {} errors",
            report.object.display_name(),
            report.success_count(),
            report.error_count()
        );
        for failed in &report.failed {
            println!("    {} {} ({}): {}", "✗".red(), failed.label, failed.name, failed.error);
        }
    }
    if summary.pipeline_created {
        println!("Pipeline: {}", "✓ Created".green());
    } else {
        println!("Pipeline: {}", "✗ Failed".red());
    }
}

fn print_next_steps() {
    println!();
    output::success("Setup completed!");
    println!("\nNext steps:");
    println!("  1. Review fields in Twenty CRM UI");
    println!("  2. Configure field permissions");
    println!("  3. Test n8n integration");
    println!("  4. Train team on new fields");
}
