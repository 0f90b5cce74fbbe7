use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::road::{total_distance, Road};
use crate::roadmap::PointIndex;

/// Ordered sequence of roads walking from a start point to an end point.
///
/// An empty route means either that start and end are the same point or
/// that the end cannot be reached; callers tell the two apart by comparing
/// the endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    roads: Vec<Road>,
    distance: u64,
}

impl Route {
    /// Roads in traversal order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.roads.len()
    }

    pub fn total_distance(&self) -> u64 {
        self.distance
    }
}

/// Run Dijkstra's algorithm over `roads` and return the fastest route from
/// `start` to `end`.
///
/// Incident roads are relaxed in `(distance, id)` order and a predecessor is
/// only replaced by a strictly shorter candidate, so among equally short
/// routes the result is reproducible. The search stops as soon as `end` is
/// settled.
///
/// Fails with [`crate::Error::UnknownPoint`] when `start` or `end` (or any
/// road endpoint) is not part of `points`, and with
/// [`crate::Error::DistanceOverflow`] when the roads together are longer than
/// a `u64` can hold.
pub fn find_fastest_route(
    points: &PointIndex,
    roads: &[Road],
    start: &str,
    end: &str,
) -> Result<Route> {
    let start_id = points.resolve(start)?;
    let end_id = points.resolve(end)?;
    let graph = Graph::build(points, roads)?;
    // A candidate to an unreached point never reuses a road already on its
    // predecessor's route, so it is bounded by this total. Candidates that
    // overflow can only be worse than a known distance.
    total_distance(roads)?;

    let mut distances: Vec<Option<u64>> = vec![None; graph.point_count()];
    let mut previous: Vec<Option<&Road>> = vec![None; graph.point_count()];
    let mut queue = BinaryHeap::new();
    let mut pushed: u64 = 0;

    distances[start_id] = Some(0);
    queue.push(QueueEntry::new(start_id, 0, pushed));

    while let Some(entry) = queue.pop() {
        match distances[entry.point] {
            Some(best) if best < entry.distance => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.point == end_id {
            break;
        }

        for incident in graph.neighbours(entry.point) {
            let Some(candidate) = entry.distance.checked_add(incident.road.distance) else {
                continue;
            };
            let improves = match distances[incident.neighbour] {
                Some(best) => candidate < best,
                None => true,
            };
            if improves {
                distances[incident.neighbour] = Some(candidate);
                previous[incident.neighbour] = Some(incident.road);
                pushed += 1;
                queue.push(QueueEntry::new(incident.neighbour, candidate, pushed));
            }
        }
    }

    let distance = distances[end_id].unwrap_or(0);
    let route = reconstruct_route(points, &previous, end_id, distance);
    debug!(
        start,
        end,
        hops = route.hop_count(),
        distance = route.total_distance(),
        "fastest route search finished"
    );
    Ok(route)
}

fn reconstruct_route(
    points: &PointIndex,
    previous: &[Option<&Road>],
    end: usize,
    distance: u64,
) -> Route {
    let mut roads = Vec::new();
    let mut at = end;
    while let Some(road) = previous[at] {
        roads.push(road.clone());
        let Some(next) = points
            .name(at)
            .and_then(|name| points.index_of(road.other_end(name)))
        else {
            break;
        };
        at = next;
    }
    roads.reverse();
    Route { roads, distance }
}

/// Heap entry carrying the distance known when it was pushed.
///
/// Entries whose distance is worse than the current best are stale and
/// skipped on pop. Equal distances pop in push order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    point: usize,
    distance: u64,
    sequence: u64,
}

impl QueueEntry {
    fn new(point: usize, distance: u64, sequence: u64) -> Self {
        Self {
            point,
            distance,
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by distance.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
