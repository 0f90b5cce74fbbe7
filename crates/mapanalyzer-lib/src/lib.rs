//! MapAnalyzer library entry points.
//!
//! This crate loads a tab-separated road map into memory, finds the fastest
//! route between its two designated points, builds the barely connected map
//! (a minimum spanning forest) and compares the two. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod analysis;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod road;
pub mod roadmap;
pub mod spanning;
pub mod union_find;

pub use analysis::{analyze, MapAnalysis, Ratio};
pub use error::{Error, Result};
pub use graph::{Graph, Incident};
pub use output::{write_report, AnalysisReport, ReportRenderMode, RouteReport, SpanningReport};
pub use path::{find_fastest_route, Route};
pub use road::{total_distance, Road};
pub use roadmap::{load_roadmap, PointIndex, RoadMap};
pub use spanning::{build_spanning_forest, SpanningForest};
pub use union_find::DisjointSet;
