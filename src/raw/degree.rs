/// The branching parameter of a tree, fixed at construction.
///
/// A tree of degree `D` allows at most `D` children per node, so at most
/// `D - 1` entries; a node that reaches `D` entries is over-full and must
/// split. The derived thresholds below are what the node algorithms consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Degree(usize);

impl Degree {
    /// Validates and wraps a degree.
    ///
    /// # Panics
    ///
    /// Panics if `degree < 2`; a smaller degree cannot describe a tree.
    pub(crate) fn new(degree: usize) -> Self {
        assert!(degree >= 2, "tree degree must be at least 2, got {degree}");
        Degree(degree)
    }

    /// Returns the raw degree value.
    pub(crate) fn get(self) -> usize {
        self.0
    }

    /// The most entries a node may hold; one more forces a split.
    pub(crate) fn max_entries(self) -> usize {
        self.0 - 1
    }

    /// The fewest entries a non-root node may hold.
    pub(crate) fn min_entries(self) -> usize {
        (self.0 - 1) / 2
    }

    /// The fewest entries a combined sibling run must hold to spare one
    /// entry back to the parent as a separator and still leave both halves
    /// at or above [`min_entries`](Self::min_entries).
    pub(crate) fn split_threshold(self) -> usize {
        2 * self.min_entries() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::Degree;

    #[test]
    fn thresholds() {
        for (degree, max, min, split) in [
            (2, 1, 0, 1),
            (3, 2, 1, 3),
            (4, 3, 1, 3),
            (5, 4, 2, 5),
            (100, 99, 49, 99),
        ] {
            let d = Degree::new(degree);
            assert_eq!(d.get(), degree);
            assert_eq!(d.max_entries(), max);
            assert_eq!(d.min_entries(), min);
            assert_eq!(d.split_threshold(), split);
        }
    }

    #[test]
    #[should_panic(expected = "degree must be at least 2")]
    fn rejects_degree_below_two() {
        let _ = Degree::new(1);
    }
}
