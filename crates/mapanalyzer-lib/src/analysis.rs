//! Comparison of a road map with its barely connected map.
//!
//! The analysis runs three computations against one [`RoadMap`]:
//! - the fastest route over every road,
//! - the barely connected map (minimum spanning forest),
//! - the fastest route over the barely connected map,
//!
//! and relates them through two [`Ratio`]s: how much road material the
//! barely connected map needs compared with the full map, and how much longer
//! the fastest route becomes on it.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::info;

use crate::error::{Error, Result};
use crate::path::{find_fastest_route, Route};
use crate::road::{total_distance, Road};
use crate::roadmap::RoadMap;
use crate::spanning::{build_spanning_forest, SpanningForest};

/// Exact quotient of two distance totals.
///
/// Kept as integers so rendering can round half up on the exact value rather
/// than on a binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    /// Build a ratio, failing with [`Error::UndefinedRatio`] on a zero
    /// denominator.
    pub fn new(numerator: u64, denominator: u64, label: &'static str) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::UndefinedRatio { ratio: label });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Value scaled by 100 and rounded half up, i.e. the two-decimal digits.
    fn hundredths(&self) -> u128 {
        let numerator = u128::from(self.numerator) * 200 + u128::from(self.denominator);
        numerator / (u128::from(self.denominator) * 2)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.hundredths();
        write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Result of analysing one road map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapAnalysis {
    pub start: String,
    pub end: String,
    pub fastest_route: Route,
    pub barely_connected: SpanningForest,
    pub barely_connected_route: Route,
    /// Total distance of every road in the original map.
    pub original_distance: u64,
    /// `total(barely connected map) / total(original map)`.
    pub material_ratio: Ratio,
    /// `total(route on barely connected map) / total(route on original map)`.
    pub route_ratio: Ratio,
}

/// Analyse `map`: fastest route, barely connected map, fastest route on the
/// barely connected map, and the two ratios between them.
///
/// # Errors
///
/// - [`Error::EmptyRoadMap`] when the map has no roads,
/// - [`Error::UnknownPoint`] when the start or end point is not on any road,
/// - [`Error::RouteNotFound`] when the barely connected map cannot reach the
///   end point,
/// - [`Error::UndefinedRatio`] when a ratio's reference total is zero,
/// - [`Error::DistanceOverflow`] when the roads together are longer than a
///   `u64` can hold.
pub fn analyze(map: &RoadMap) -> Result<MapAnalysis> {
    if map.roads().is_empty() {
        return Err(Error::EmptyRoadMap);
    }

    let points = map.points();
    let (start, end) = (map.start(), map.end());

    let fastest_route = find_fastest_route(points, map.roads(), start, end)?;
    let barely_connected = build_spanning_forest(points, map.roads())?;
    let barely_connected_route = find_fastest_route(points, barely_connected.roads(), start, end)?;

    if barely_connected_route.is_empty() && start != end {
        return Err(Error::RouteNotFound {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let original_distance = total_distance(map.roads())?;
    let material_ratio = Ratio::new(
        barely_connected.total_distance(),
        original_distance,
        "construction material",
    )?;
    let route_ratio = Ratio::new(
        barely_connected_route.total_distance(),
        fastest_route.total_distance(),
        "fastest route",
    )?;

    info!(
        start,
        end,
        roads = map.roads().len(),
        barely_connected_roads = barely_connected.roads().len(),
        material_ratio = %material_ratio,
        route_ratio = %route_ratio,
        "road map analysed"
    );

    Ok(MapAnalysis {
        start: start.to_string(),
        end: end.to_string(),
        fastest_route,
        barely_connected,
        barely_connected_route,
        original_distance,
        material_ratio,
        route_ratio,
    })
}

impl MapAnalysis {
    /// Roads of the barely connected map, in acceptance order.
    pub fn barely_connected_roads(&self) -> &[Road] {
        self.barely_connected.roads()
    }
}
