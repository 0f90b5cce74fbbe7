//! Spanning command handler: the barely connected map on its own.

use std::path::Path;

use anyhow::{Context, Result};

use mapanalyzer_cli::output::{print_rendered, OutputFormat};
use mapanalyzer_lib::{load_roadmap, SpanningReport};

/// Handle the spanning subcommand.
pub fn handle_spanning_command(input: &Path, format: OutputFormat) -> Result<()> {
    let map = load_roadmap(input)
        .with_context(|| format!("failed to load road map from {}", input.display()))?;
    let forest = map.barely_connected_map()?;
    let report = SpanningReport::new(&forest);

    let rendered = match format {
        OutputFormat::Text => {
            let mut text = report.render_text();
            text.push_str(&format!(
                "Total: {} KM over {} component(s)\n",
                report.distance, report.component_count
            ));
            text
        }
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
    };
    print_rendered(&rendered)?;
    Ok(())
}
