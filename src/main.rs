use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use twenty_setup::api::TwentyClient;
use twenty_setup::config::Settings;
use twenty_setup::logging;
use twenty_setup::runner::{self, Outcome};
use twenty_setup::schema::Catalog;
use twenty_setup::ui::TerminalConfirmer;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(Path::new(logging::LOG_FILE));

    info!("Starting twenty-setup");

    let catalog = Catalog::standard();
    // An unusable working directory surfaces as an export failure
    let output_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut confirmer = TerminalConfirmer;

    let outcome = runner::run_with(
        Settings::from_env(),
        TwentyClient::new,
        &catalog,
        &mut confirmer,
        &output_dir,
    )
    .await;

    match outcome {
        Outcome::Aborted(reason) => info!("Run aborted: {}", reason),
        Outcome::Completed(summary) => info!("Run completed with {} errors", summary.error_count()),
    }

    Ok(())
}
