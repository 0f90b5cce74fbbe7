use crate::error::Result;
use crate::road::Road;
use crate::roadmap::PointIndex;

/// Road reachable from a point, together with the point on its far side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incident<'a> {
    pub road: &'a Road,
    pub neighbour: usize,
}

/// Adjacency view over a borrowed road list, keyed by point index.
///
/// Incident roads of each point are kept sorted by `(distance, id)` so every
/// traversal visits them in the same order.
#[derive(Debug, Clone, Default)]
pub struct Graph<'a> {
    adjacency: Vec<Vec<Incident<'a>>>,
}

impl<'a> Graph<'a> {
    /// Build the adjacency view of `roads` over the universe `points`.
    ///
    /// Fails with [`crate::Error::UnknownPoint`] when a road endpoint is not
    /// part of `points`.
    pub fn build(points: &PointIndex, roads: &'a [Road]) -> Result<Self> {
        let mut adjacency: Vec<Vec<Incident<'a>>> = vec![Vec::new(); points.len()];
        for road in roads {
            let left = points.resolve(&road.point1)?;
            let right = points.resolve(&road.point2)?;
            adjacency[left].push(Incident {
                road,
                neighbour: right,
            });
            if left != right {
                adjacency[right].push(Incident {
                    road,
                    neighbour: left,
                });
            }
        }

        for incident in &mut adjacency {
            incident.sort_by(|a, b| a.road.cmp(b.road));
        }

        Ok(Self { adjacency })
    }

    /// Number of points the view was built over.
    pub fn point_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the incident roads for a given point index.
    pub fn neighbours(&self, point: usize) -> &[Incident<'a>] {
        self.adjacency
            .get(point)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_roads_are_sorted_by_distance_then_id() {
        let roads = vec![
            Road::new("A", "B", 9, 1),
            Road::new("A", "C", 3, 5),
            Road::new("D", "A", 3, 2),
        ];
        let points = PointIndex::from_roads(&roads);
        let graph = Graph::build(&points, &roads).expect("graph builds");

        let a = points.index_of("A").expect("A exists");
        let ids: Vec<u64> = graph.neighbours(a).iter().map(|i| i.road.id).collect();
        assert_eq!(ids, vec![2, 5, 1]);

        let d = points.index_of("D").expect("D exists");
        assert_eq!(graph.neighbours(d).len(), 1);
        assert_eq!(graph.neighbours(d)[0].neighbour, a);
    }

    #[test]
    fn points_without_roads_in_subset_have_no_neighbours() {
        let all = vec![Road::new("A", "B", 1, 1), Road::new("B", "C", 1, 2)];
        let points = PointIndex::from_roads(&all);
        let graph = Graph::build(&points, &all[..1]).expect("graph builds");
        assert_eq!(graph.point_count(), 3);
        let c = points.index_of("C").expect("C exists");
        assert!(graph.neighbours(c).is_empty());
        assert!(graph.neighbours(99).is_empty());
    }

    #[test]
    fn self_loop_is_listed_once() {
        let roads = vec![Road::new("A", "A", 2, 1)];
        let points = PointIndex::from_roads(&roads);
        let graph = Graph::build(&points, &roads).expect("graph builds");
        assert_eq!(graph.neighbours(0).len(), 1);
    }
}
