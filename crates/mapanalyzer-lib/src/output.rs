use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::analysis::{MapAnalysis, Ratio};
use crate::error::Result;
use crate::path::Route;
use crate::road::Road;
use crate::spanning::SpanningForest;

/// Presentation style for turning a report into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRenderMode {
    /// Tab-separated classic layout, one road per line.
    PlainText,
    /// Pretty-printed JSON document.
    Json,
}

/// A route between two named points with its total distance.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteReport {
    pub start: String,
    pub end: String,
    pub distance: u64,
    pub roads: Vec<Road>,
}

impl RouteReport {
    pub fn new(start: &str, end: &str, route: &Route) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            distance: route.total_distance(),
            roads: route.roads().to_vec(),
        }
    }

    /// Heading line followed by one line per road in traversal order.
    ///
    /// `qualifier` is appended after the endpoints, e.g. `" on Barely
    /// Connected Map"`.
    pub fn render_text(&self, qualifier: &str) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Fastest Route from {} to {}{} ({} KM):",
            self.start, self.end, qualifier, self.distance
        );
        push_roads(&mut buffer, &self.roads);
        buffer
    }
}

/// The barely connected map with its total distance.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpanningReport {
    pub distance: u64,
    pub component_count: usize,
    pub roads: Vec<Road>,
}

impl SpanningReport {
    pub fn new(forest: &SpanningForest) -> Self {
        Self {
            distance: forest.total_distance(),
            component_count: forest.component_count(),
            roads: forest.roads().to_vec(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut buffer = String::from("Roads of Barely Connected Map is:\n");
        push_roads(&mut buffer, &self.roads);
        buffer
    }
}

/// Structured representation of a [`MapAnalysis`] that higher-level
/// consumers can serialise or print.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub fastest_route: RouteReport,
    pub barely_connected_map: SpanningReport,
    pub barely_connected_route: RouteReport,
    pub original_distance: u64,
    pub material_ratio: Ratio,
    pub route_ratio: Ratio,
}

impl AnalysisReport {
    pub fn from_analysis(analysis: &MapAnalysis) -> Self {
        Self {
            fastest_route: RouteReport::new(
                &analysis.start,
                &analysis.end,
                &analysis.fastest_route,
            ),
            barely_connected_map: SpanningReport::new(&analysis.barely_connected),
            barely_connected_route: RouteReport::new(
                &analysis.start,
                &analysis.end,
                &analysis.barely_connected_route,
            ),
            original_distance: analysis.original_distance,
            material_ratio: analysis.material_ratio,
            route_ratio: analysis.route_ratio,
        }
    }

    /// Render the report using the requested presentation style.
    pub fn render(&self, mode: ReportRenderMode) -> Result<String> {
        match mode {
            ReportRenderMode::PlainText => Ok(self.render_text()),
            ReportRenderMode::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_text(&self) -> String {
        let mut buffer = self.fastest_route.render_text("");
        buffer.push_str(&self.barely_connected_map.render_text());
        buffer.push_str(
            &self
                .barely_connected_route
                .render_text(" on Barely Connected Map"),
        );
        buffer.push_str("Analysis:\n");
        let _ = writeln!(
            buffer,
            "Ratio of Construction Material Usage Between Barely Connected and Original Map: {}",
            self.material_ratio
        );
        let _ = writeln!(
            buffer,
            "Ratio of Fastest Route Between Barely Connected and Original Map: {}",
            self.route_ratio
        );
        buffer
    }
}

fn push_roads(buffer: &mut String, roads: &[Road]) {
    for road in roads {
        let _ = writeln!(buffer, "{road}");
    }
}

/// Write `contents` to `destination` atomically.
///
/// The text goes to a temporary file next to the destination which is then
/// renamed into place, so a failed write never leaves a partial report.
pub fn write_report(destination: &Path, contents: &str) -> Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(destination).map_err(|err| err.error)?;
    debug!(path = %destination.display(), bytes = contents.len(), "report written");
    Ok(())
}
