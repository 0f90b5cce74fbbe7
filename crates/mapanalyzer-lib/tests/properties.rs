//! Property tests for the route finder and the barely connected map.
//!
//! Each case draws a small random multigraph and checks the results against
//! simple reference computations (reachability by flood fill, distances by
//! Floyd-Warshall).

use std::collections::HashSet;

use mapanalyzer_lib::{
    build_spanning_forest, find_fastest_route, total_distance, PointIndex, Road,
};
use proptest::prelude::*;

const MAX_POINTS: usize = 8;

fn road_lists() -> impl Strategy<Value = Vec<Road>> {
    prop::collection::vec((0..MAX_POINTS, 0..MAX_POINTS, 0u64..20), 1..16).prop_map(|raw| {
        let count = raw.len() as u64;
        raw.into_iter()
            .enumerate()
            .map(|(index, (a, b, distance))| {
                // Descending ids so input order and tie-break order differ.
                Road::new(format!("P{a}"), format!("P{b}"), distance, count - index as u64)
            })
            .collect()
    })
}

fn reachable(points: &PointIndex, roads: &[Road], from: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([from]);
    let mut stack = vec![from];
    while let Some(current) = stack.pop() {
        let Some(name) = points.name(current) else {
            continue;
        };
        for road in roads.iter().filter(|road| road.connects(name)) {
            let next = points.index_of(road.other_end(name)).expect("known point");
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

fn all_pairs_distances(points: &PointIndex, roads: &[Road]) -> Vec<Vec<Option<u64>>> {
    let n = points.len();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for road in roads {
        let a = points.index_of(&road.point1).expect("known point");
        let b = points.index_of(&road.point2).expect("known point");
        for (x, y) in [(a, b), (b, a)] {
            if dist[x][y].map_or(true, |d| road.distance < d) {
                dist[x][y] = Some(road.distance);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn forest_is_acyclic_and_preserves_connectivity(roads in road_lists()) {
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");

        // A forest over n points with c components has exactly n - c edges.
        prop_assert_eq!(forest.roads().len(), points.len() - forest.component_count());

        for from in 0..points.len() {
            prop_assert_eq!(
                reachable(&points, &roads, from),
                reachable(&points, forest.roads(), from)
            );
        }
    }

    #[test]
    fn forest_is_deterministic(roads in road_lists()) {
        let points = PointIndex::from_roads(&roads);
        let first = build_spanning_forest(&points, &roads).expect("forest builds");
        let second = build_spanning_forest(&points, &roads).expect("forest builds");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn forest_never_costs_more_than_the_map(roads in road_lists()) {
        let points = PointIndex::from_roads(&roads);
        let forest = build_spanning_forest(&points, &roads).expect("forest builds");
        let all = total_distance(&roads).expect("small totals fit");
        prop_assert_eq!(
            forest.total_distance(),
            total_distance(forest.roads()).expect("small totals fit")
        );
        prop_assert!(forest.total_distance() <= all);
        if forest.roads().len() == roads.len() {
            prop_assert_eq!(forest.total_distance(), all);
        }
    }

    #[test]
    fn route_is_optimal_simple_and_deterministic(
        roads in road_lists(),
        start_pick in 0..MAX_POINTS,
        end_pick in 0..MAX_POINTS,
    ) {
        let points = PointIndex::from_roads(&roads);
        let start = points.name(start_pick % points.len()).expect("in range").to_string();
        let end = points.name(end_pick % points.len()).expect("in range").to_string();

        let route = find_fastest_route(&points, &roads, &start, &end).expect("search runs");
        let again = find_fastest_route(&points, &roads, &start, &end).expect("search runs");
        prop_assert_eq!(&route, &again);

        let dist = all_pairs_distances(&points, &roads);
        let s = points.index_of(&start).expect("known point");
        let e = points.index_of(&end).expect("known point");

        match dist[s][e] {
            Some(best) if s != e => {
                prop_assert!(!route.is_empty());
                prop_assert_eq!(route.total_distance(), best);
            }
            _ => {
                prop_assert!(route.is_empty());
                prop_assert_eq!(route.total_distance(), 0);
            }
        }
        prop_assert_eq!(
            route.total_distance(),
            total_distance(route.roads()).expect("small totals fit")
        );

        // Walk the route: consecutive roads share a point and no point repeats.
        let mut at = start.clone();
        let mut visited = HashSet::from([at.clone()]);
        for road in route.roads() {
            prop_assert!(road.connects(&at));
            at = road.other_end(&at).to_string();
            prop_assert!(visited.insert(at.clone()));
        }
        if !route.is_empty() {
            prop_assert_eq!(at, end);
        }
    }
}
