//! Union-find (disjoint set union) over dense point indices.
//!
//! The spanning forest builder merges the endpoints of every accepted road
//! and relies on [`DisjointSet::union`] reporting whether a merge happened to
//! reject roads that would close a cycle.

/// Disjoint set over the fixed universe `0..n` with union by rank and path
/// compression.
///
/// Indices outside `0..n` are a programming error and panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct classes currently tracked.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Return the representative of `node`'s class.
    ///
    /// Every node visited on the way up is re-pointed straight at the root.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Whether `left` and `right` are already in the same class.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merge the classes of `left` and `right`.
    ///
    /// Returns `false` without touching the structure when both are already
    /// joined. On equal ranks the root of `right` goes under the root of
    /// `left`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }
        self.components -= 1;
        true
    }
}
