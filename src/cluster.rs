//! Categorical clustering: rank distinct key values by frequency and map each
//! record to a palette color by rank.

use plotters::style::RGBColor;

/// Categorical value extracted from a record; `None` is its own category
/// (records with no equipment assigned still form a cluster).
pub type ClusterKey = Option<String>;

/// Default chart palette; most frequent cluster gets the first color.
/// Order: red, green, blue, magenta, cyan, yellow.
pub const CLUSTER_PALETTE: [RGBColor; 6] = [
    RGBColor(255, 0, 0),   // red     (#FF0000)
    RGBColor(0, 210, 0),   // green   (#00D200)
    RGBColor(0, 0, 255),   // blue    (#0000FF)
    RGBColor(255, 0, 255), // magenta (#FF00FF)
    RGBColor(0, 255, 255), // cyan    (#00FFFF)
    RGBColor(255, 255, 0), // yellow  (#FFFF00)
];

/// Distinct cluster keys ranked by descending occurrence count.
///
/// Rebuilt from scratch for every chart render; never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterOrder(Vec<ClusterKey>);

impl ClusterOrder {
    /// Rank the distinct values of `keys` by how often they occur,
    /// most frequent first. Ties keep first-seen order.
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = ClusterKey>,
    {
        let mut counts: Vec<(ClusterKey, usize)> = Vec::new();
        for key in keys {
            match counts.iter_mut().find(|(k, _)| *k == key) {
                Some((_, n)) => *n += 1,
                None => counts.push((key, 1)),
            }
        }
        // sort_by is stable, so equal counts preserve first-seen order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        ClusterOrder(counts.into_iter().map(|(k, _)| k).collect())
    }

    /// Zero-based rank of `key`, or `None` if it never occurred in the batch
    /// this order was built from.
    pub fn position(&self, key: &ClusterKey) -> Option<usize> {
        self.0.iter().position(|k| k == key)
    }

    /// Palette color for `key`, wrapping around when there are more clusters
    /// than colors. A key absent from the order cannot happen when the order
    /// was built from the same batch; it is guarded anyway and maps to
    /// `palette[0]` rather than failing.
    pub fn color_of(&self, key: &ClusterKey, palette: &[RGBColor]) -> RGBColor {
        debug_assert!(
            self.position(key).is_some(),
            "cluster key not present in the order built for this batch"
        );
        let i = self.position(key).unwrap_or(0);
        palette[i % palette.len()]
    }

    pub fn keys(&self) -> &[ClusterKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ClusterKey {
        Some(s.to_string())
    }

    #[test]
    fn ranks_by_descending_count() {
        let order = ClusterOrder::build(
            ["A", "B", "A", "C", "A", "B"].iter().map(|s| key(s)),
        );
        assert_eq!(order.keys(), &[key("A"), key("B"), key("C")]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let order = ClusterOrder::build(["X", "Y", "Y", "X"].iter().map(|s| key(s)));
        assert_eq!(order.keys(), &[key("X"), key("Y")]);
    }

    #[test]
    fn none_is_its_own_category() {
        let order = ClusterOrder::build(vec![None, key("A"), None]);
        assert_eq!(order.keys(), &[None, key("A")]);
        assert_eq!(order.position(&None), Some(0));
    }

    #[test]
    fn color_wraps_past_palette_end() {
        let order = ClusterOrder::build(
            ["A", "B", "A", "C", "A", "B"].iter().map(|s| key(s)),
        );
        let palette = [RGBColor(1, 1, 1), RGBColor(2, 2, 2)];
        // C is rank 2; 2 mod 2 == 0.
        assert_eq!(order.color_of(&key("C"), &palette), palette[0]);
        assert_eq!(order.color_of(&key("A"), &palette), palette[0]);
        assert_eq!(order.color_of(&key("B"), &palette), palette[1]);
    }
}
