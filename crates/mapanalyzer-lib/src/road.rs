use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Undirected road between two named points.
///
/// Roads order by `(distance, id)`. Ids are unique within a loaded map; the
/// endpoint names only break ties between roads built by hand with a repeated
/// id, keeping the order consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Road {
    pub point1: String,
    pub point2: String,
    pub distance: u64,
    pub id: u64,
}

impl Road {
    pub fn new(
        point1: impl Into<String>,
        point2: impl Into<String>,
        distance: u64,
        id: u64,
    ) -> Self {
        Self {
            point1: point1.into(),
            point2: point2.into(),
            distance,
            id,
        }
    }

    /// Return the endpoint opposite to `point`.
    ///
    /// When `point` is not an endpoint the first endpoint is returned; callers
    /// only ask for roads they reached through one of the endpoints.
    pub fn other_end(&self, point: &str) -> &str {
        if self.point1 == point {
            &self.point2
        } else {
            &self.point1
        }
    }

    /// Whether the road touches `point`.
    pub fn connects(&self, point: &str) -> bool {
        self.point1 == point || self.point2 == point
    }
}

impl Ord for Road {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.point1.cmp(&other.point1))
            .then_with(|| self.point2.cmp(&other.point2))
    }
}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.point1, self.point2, self.distance, self.id
        )
    }
}

/// Sum of road distances. An empty slice totals zero.
///
/// Fails with [`Error::DistanceOverflow`] when the sum does not fit in a
/// `u64`.
pub fn total_distance<'a>(roads: impl IntoIterator<Item = &'a Road>) -> Result<u64> {
    roads
        .into_iter()
        .try_fold(0u64, |total, road| total.checked_add(road.distance))
        .ok_or(Error::DistanceOverflow)
}
