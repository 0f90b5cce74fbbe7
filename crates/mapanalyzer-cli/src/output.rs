//! Output format selection for command results.

use std::io::{self, Write};

use clap::ValueEnum;
use mapanalyzer_lib::ReportRenderMode;

/// Output format requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Classic tab-separated report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Matching library render mode.
    pub fn render_mode(self) -> ReportRenderMode {
        match self {
            OutputFormat::Text => ReportRenderMode::PlainText,
            OutputFormat::Json => ReportRenderMode::Json,
        }
    }
}

/// Write already rendered text to stdout in one go.
pub fn print_rendered(rendered: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()
}
