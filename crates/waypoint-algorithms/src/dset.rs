//! Disjoint-set (union-find) over dense node indices
//!
//! Path compression on `find`, union by rank on `union`. The equal-rank
//! tie-break is fixed: the second argument's root is attached under the
//! first argument's root, whose rank then grows. Kruskal's edge selection
//! across equal-weight ties depends on this rule staying put.

#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// One singleton set per element `0..n`
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of the set containing `x`, compressing the path walked.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point everything on the path at the root
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if a merge happened, `false` if they were already
    /// in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }

    /// Whether `a` and `b` are in the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut dset = DisjointSet::new(3);
        assert_eq!(dset.find(0), 0);
        assert_eq!(dset.find(2), 2);
        assert!(!dset.connected(0, 1));
    }

    #[test]
    fn test_union_merges() {
        let mut dset = DisjointSet::new(4);
        assert!(dset.union(0, 1));
        assert!(dset.union(2, 3));
        assert!(!dset.connected(0, 2));
        assert!(dset.union(1, 2));
        assert!(dset.connected(0, 3));
    }

    #[test]
    fn test_union_same_set_returns_false() {
        let mut dset = DisjointSet::new(3);
        assert!(dset.union(0, 1));
        assert!(!dset.union(1, 0));
        assert!(!dset.union(0, 0));
    }

    #[test]
    fn test_equal_rank_tie_break() {
        // Equal ranks: b's root goes under a's root
        let mut dset = DisjointSet::new(2);
        assert!(dset.union(0, 1));
        assert_eq!(dset.find(1), 0);

        // And the surviving root's rank grew: another equal-rank union
        // against a fresh pair keeps 0 on top
        let mut dset = DisjointSet::new(4);
        dset.union(0, 1); // root 0, rank 1
        dset.union(2, 3); // root 2, rank 1
        dset.union(0, 2); // equal ranks again -> 2 under 0
        assert_eq!(dset.find(3), 0);
    }

    #[test]
    fn test_path_compression() {
        let mut dset = DisjointSet::new(4);
        // Chain 3 -> 2 -> 1 -> 0 by rigging parents directly via unions
        dset.union(0, 1);
        dset.union(0, 2);
        dset.union(0, 3);
        let root = dset.find(3);
        assert_eq!(root, 0);
        // After compression every find is a single hop
        assert_eq!(dset.parent[3], root);
    }
}
