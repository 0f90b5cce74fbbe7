//! Analyze command handler: full road map report.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use mapanalyzer_cli::output::{print_rendered, OutputFormat};
use mapanalyzer_lib::{load_roadmap, write_report, AnalysisReport};

/// Handle the analyze subcommand.
///
/// The report is fully rendered before anything is written, so a failing
/// analysis never leaves a partial report behind.
pub fn handle_analyze_command(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let map = load_roadmap(input)
        .with_context(|| format!("failed to load road map from {}", input.display()))?;
    let analysis = map
        .analyze()
        .with_context(|| format!("failed to analyse road map {}", input.display()))?;
    let rendered = AnalysisReport::from_analysis(&analysis).render(format.render_mode())?;

    match output {
        Some(path) => {
            write_report(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print_rendered(&rendered)?,
    }

    Ok(())
}
