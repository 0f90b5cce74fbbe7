//! Road map loading and the point universe.
//!
//! A road map file is tab separated. The first line names the start and end
//! points; every following line describes one road as
//! `point1\tpoint2\tdistance\tid`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::analysis::{analyze, MapAnalysis};
use crate::error::{Error, Result};
use crate::path::{find_fastest_route, Route};
use crate::road::Road;
use crate::spanning::{build_spanning_forest, SpanningForest};

/// Minimum Jaro-Winkler similarity for a point name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Dense numbering of every point that appears as a road endpoint.
///
/// Indices are assigned in first-appearance order, so the same road list
/// always yields the same numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointIndex {
    names: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl PointIndex {
    /// Collect the endpoints of `roads` into a new index.
    pub fn from_roads<'a>(roads: impl IntoIterator<Item = &'a Road>) -> Self {
        let mut index = Self::default();
        for road in roads {
            index.insert(&road.point1);
            index.insert(&road.point2);
        }
        index
    }

    /// Insert a point, returning its index. Existing points keep theirs.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), index);
        index
    }

    /// Lookup a point index by its case-sensitive name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Lookup a point name by index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Point names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve a point name to its index, suggesting close matches on failure.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name).ok_or_else(|| Error::UnknownPoint {
            name: name.to_string(),
            suggestions: self.fuzzy_point_matches(name, 3),
        })
    }

    /// Return up to `limit` point names that look similar to `name`, best first.
    pub fn fuzzy_point_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// In-memory road map: the two designated points plus every road.
///
/// This is the owned context every analysis runs against; nothing is kept in
/// global state, so several maps can be analysed side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadMap {
    start: String,
    end: String,
    roads: Vec<Road>,
    points: PointIndex,
}

impl RoadMap {
    /// Build a road map from already parsed parts.
    pub fn new(start: impl Into<String>, end: impl Into<String>, roads: Vec<Road>) -> Self {
        let points = PointIndex::from_roads(&roads);
        Self {
            start: start.into(),
            end: end.into(),
            roads,
            points,
        }
    }

    /// Load a road map from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading road map");
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a road map from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut tsv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = tsv_reader.records();
        let header = records.next().ok_or(Error::MissingEndpoints)??;
        let (start, end) = parse_endpoints(&header)?;

        let mut roads = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut total: u64 = 0;
        for result in records {
            let record = result?;
            let road = parse_road(&record)?;
            if !seen_ids.insert(road.id) {
                return Err(Error::DuplicateRoadId {
                    id: road.id,
                    line: line_of(&record),
                });
            }
            total = total
                .checked_add(road.distance)
                .ok_or_else(|| Error::MalformedInput {
                    line: line_of(&record),
                    message: format!("total road distance exceeds {}", u64::MAX),
                })?;
            roads.push(road);
        }

        let map = Self::new(start, end, roads);
        debug!(
            start = %map.start,
            end = %map.end,
            roads = map.roads.len(),
            points = map.points.len(),
            "road map loaded"
        );
        Ok(map)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Roads in input order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn points(&self) -> &PointIndex {
        &self.points
    }

    /// Fastest route between the designated start and end over every road.
    pub fn fastest_route(&self) -> Result<Route> {
        find_fastest_route(&self.points, &self.roads, &self.start, &self.end)
    }

    /// Minimum spanning forest over every road.
    pub fn barely_connected_map(&self) -> Result<SpanningForest> {
        build_spanning_forest(&self.points, &self.roads)
    }

    /// Run the complete analysis for this map.
    pub fn analyze(&self) -> Result<MapAnalysis> {
        analyze(self)
    }
}

/// Load a road map from `path`.
pub fn load_roadmap(path: &Path) -> Result<RoadMap> {
    RoadMap::from_path(path)
}

fn parse_endpoints(record: &StringRecord) -> Result<(String, String)> {
    match (record.len(), record.get(0), record.get(1)) {
        (2, Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
            Ok((start.to_string(), end.to_string()))
        }
        (fields, _, _) => Err(Error::MalformedInput {
            line: line_of(record),
            message: format!("expected 2 tab-separated point names, found {fields} field(s)"),
        }),
    }
}

fn parse_road(record: &StringRecord) -> Result<Road> {
    let line = line_of(record);
    if record.len() != 4 {
        return Err(Error::MalformedInput {
            line,
            message: format!("expected 4 tab-separated fields, found {}", record.len()),
        });
    }

    Ok(Road {
        point1: required_field(record, 0, "first point", line)?.to_string(),
        point2: required_field(record, 1, "second point", line)?.to_string(),
        distance: numeric_field(record, 2, "distance", line)?,
        id: numeric_field(record, 3, "id", line)?,
    })
}

fn required_field<'r>(
    record: &'r StringRecord,
    index: usize,
    label: &str,
    line: u64,
) -> Result<&'r str> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MalformedInput {
            line,
            message: format!("missing {label}"),
        }),
    }
}

fn numeric_field(record: &StringRecord, index: usize, label: &str, line: u64) -> Result<u64> {
    let raw = required_field(record, index, label, line)?;
    raw.parse::<u64>().map_err(|err| Error::MalformedInput {
        line,
        message: format!("invalid {label} '{raw}': {err}"),
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}
