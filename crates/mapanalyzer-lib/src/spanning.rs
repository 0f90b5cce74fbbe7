//! Barely connected map construction (Kruskal's algorithm).
//!
//! Roads are scanned in `(distance, id)` order and kept whenever they join two
//! previously separate classes of the [`DisjointSet`]. The scan always covers
//! every road, so a disconnected map yields a spanning forest with one tree
//! per connected component.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::road::{total_distance, Road};
use crate::roadmap::PointIndex;
use crate::union_find::DisjointSet;

/// Minimum spanning forest over a set of roads.
///
/// When the input map is connected the forest is a minimum spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    roads: Vec<Road>,
    distance: u64,
    component_count: usize,
}

impl SpanningForest {
    /// Accepted roads in acceptance order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }

    /// Number of connected components spanned by the forest.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` when the forest spans a single connected component.
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    pub fn total_distance(&self) -> u64 {
        self.distance
    }
}

/// Build the minimum spanning forest of `roads` over the universe `points`.
///
/// Fails with [`crate::Error::UnknownPoint`] when a road endpoint is not part
/// of `points`, and with [`crate::Error::DistanceOverflow`] when the accepted
/// roads are longer than a `u64` can hold.
pub fn build_spanning_forest(points: &PointIndex, roads: &[Road]) -> Result<SpanningForest> {
    let mut sorted: Vec<&Road> = roads.iter().collect();
    sorted.sort();

    let mut components = DisjointSet::new(points.len());
    let mut accepted = Vec::with_capacity(points.len().saturating_sub(1));
    for road in sorted {
        let left = points.resolve(&road.point1)?;
        let right = points.resolve(&road.point2)?;
        if components.union(left, right) {
            accepted.push(road.clone());
        }
    }

    let distance = total_distance(&accepted)?;
    debug!(
        roads = roads.len(),
        distance,
        accepted = accepted.len(),
        components = components.components(),
        "built spanning forest"
    );

    Ok(SpanningForest {
        roads: accepted,
        distance,
        component_count: components.components(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn ids(forest: &SpanningForest) -> Vec<u64> {
        forest.roads().iter().map(|road| road.id).collect()
    }

    #[test]
    fn triangle_drops_heaviest_road() {
        let roads = vec![
            Road::new("A", "B", 5, 1),
            Road::new("B", "C", 5, 2),
            Road::new("A", "C", 20, 3),
        ];
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");
        assert_eq!(ids(&forest), vec![1, 2]);
        assert_eq!(forest.total_distance(), 10);
        assert!(forest.is_tree());
    }

    #[test]
    fn equal_distances_prefer_lower_id() {
        let roads = vec![
            Road::new("A", "B", 4, 9),
            Road::new("B", "C", 4, 7),
            Road::new("A", "C", 4, 8),
        ];
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");
        assert_eq!(ids(&forest), vec![7, 8]);
    }

    #[test]
    fn disconnected_map_yields_forest() {
        let roads = vec![
            Road::new("A", "B", 1, 1),
            Road::new("C", "D", 2, 2),
            Road::new("D", "E", 3, 3),
            Road::new("C", "E", 1, 4),
        ];
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");
        assert_eq!(ids(&forest), vec![1, 4, 2]);
        assert_eq!(forest.component_count(), 2);
        assert!(!forest.is_tree());
    }

    #[test]
    fn self_loops_are_never_accepted() {
        let roads = vec![Road::new("A", "A", 0, 1), Road::new("A", "B", 3, 2)];
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");
        assert_eq!(ids(&forest), vec![2]);
    }

    #[test]
    fn oversized_forest_total_is_rejected() {
        let roads = vec![
            Road::new("A", "B", 10_000_000_000_000_000_000, 1),
            Road::new("B", "C", 10_000_000_000_000_000_000, 2),
        ];
        let points = PointIndex::from_roads(&roads);
        let err = build_spanning_forest(&points, &roads).expect_err("total overflows");
        assert!(matches!(err, Error::DistanceOverflow));
    }

    #[test]
    fn road_outside_universe_is_rejected() {
        let roads = vec![Road::new("A", "B", 1, 1)];
        let points = PointIndex::from_roads(&[Road::new("A", "C", 1, 1)]);
        let err = build_spanning_forest(&points, &roads).expect_err("B is unknown");
        assert!(matches!(err, Error::UnknownPoint { ref name, .. } if name == "B"));
    }
}
