//! Weekly aggregation: bucket activities into fixed-width, epoch-anchored
//! weeks, sum a metric per week, fill empty weeks with zero, and trim
//! all-zero edges so bar charts start and end on real data.

use crate::models::Activity;
use log::debug;
use std::collections::BTreeMap;

/// Width of one aggregation week in milliseconds.
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Index of the week containing `timestamp_ms`, counting whole weeks since
/// the epoch. Euclidean division keeps the floor correct for pre-1970
/// timestamps. Weeks are anchored to the epoch, not to local calendars;
/// that keeps the boundary timezone-agnostic.
pub fn week_index(timestamp_ms: i64) -> i64 {
    timestamp_ms.div_euclid(WEEK_MS)
}

/// Start timestamp (epoch ms) of the week containing `timestamp_ms`.
pub fn week_start(timestamp_ms: i64) -> i64 {
    week_index(timestamp_ms) * WEEK_MS
}

/// Sum of a metric over one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekBucket {
    /// Week boundary, epoch ms, always a multiple of [`WEEK_MS`].
    pub week_start_ms: i64,
    pub value: f64,
}

/// Aggregate `value_of` into one trimmed, gap-free bucket per week.
///
/// Equivalent to [`gap_filled`] followed by [`trim_zero_edges`]. Empty input
/// yields empty output.
pub fn aggregate<'a, I, F>(records: I, value_of: F) -> Vec<WeekBucket>
where
    I: IntoIterator<Item = &'a Activity>,
    F: Fn(&Activity) -> Option<f64>,
{
    trim_zero_edges(gap_filled(records, value_of))
}

/// Sum `value_of` per week and emit one bucket for every week between the
/// earliest and latest record, inclusive, with `0.0` where no record
/// contributed. The result is gap-free and covers exactly
/// `max_week - min_week + 1` weeks.
///
/// The week range comes from a full scan over all timestamps; input ordering
/// is irrelevant. A record whose `value_of` is `None` or non-finite is
/// skipped: record validity is the chart predicate's job, and one stray
/// record must not poison its whole week.
pub fn gap_filled<'a, I, F>(records: I, value_of: F) -> Vec<WeekBucket>
where
    I: IntoIterator<Item = &'a Activity>,
    F: Fn(&Activity) -> Option<f64>,
{
    let mut min_week = i64::MAX;
    let mut max_week = i64::MIN;
    let mut sums: BTreeMap<i64, f64> = BTreeMap::new();

    for activity in records {
        let week = week_index(activity.start_ms());
        min_week = min_week.min(week);
        max_week = max_week.max(week);
        match value_of(activity) {
            Some(v) if v.is_finite() => *sums.entry(week).or_default() += v,
            skipped => debug!(
                "skipping contribution {:?} from activity {} in week {}",
                skipped, activity.id, week
            ),
        }
    }
    if min_week > max_week {
        return Vec::new();
    }

    (min_week..=max_week)
        .map(|week| WeekBucket {
            week_start_ms: week * WEEK_MS,
            value: sums.get(&week).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Drop leading and trailing zero-valued buckets. Interior zero weeks stay,
/// so gaps inside the series still render as empty bars. An all-zero series
/// is returned unchanged rather than trimmed to nothing: a flat series must
/// still render, not vanish. Idempotent.
pub fn trim_zero_edges(buckets: Vec<WeekBucket>) -> Vec<WeekBucket> {
    trim_by(buckets, |b| b.value != 0.0)
}

/// Keep the span from the first to the last item matching `keep`; if nothing
/// matches, return the input unchanged.
fn trim_by<T, F>(items: Vec<T>, keep: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    let first = items.iter().position(&keep);
    let last = items.iter().rposition(&keep);
    match (first, last) {
        (Some(first), Some(last)) => items
            .into_iter()
            .skip(first)
            .take(last - first + 1)
            .collect(),
        _ => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(week: i64, value: f64) -> WeekBucket {
        WeekBucket {
            week_start_ms: week * WEEK_MS,
            value,
        }
    }

    #[test]
    fn week_boundaries_align_to_epoch() {
        assert_eq!(week_index(0), 0);
        assert_eq!(week_index(WEEK_MS - 1), 0);
        assert_eq!(week_index(WEEK_MS), 1);
        assert_eq!(week_start(WEEK_MS + 1234), WEEK_MS);
        // Pre-epoch timestamps floor downward, not toward zero.
        assert_eq!(week_index(-1), -1);
        assert_eq!(week_start(-1), -WEEK_MS);
    }

    #[test]
    fn trim_drops_zero_edges_only() {
        let trimmed = trim_zero_edges(vec![
            bucket(0, 0.0),
            bucket(1, 2.0),
            bucket(2, 0.0),
            bucket(3, 1.0),
            bucket(4, 0.0),
        ]);
        assert_eq!(trimmed, vec![bucket(1, 2.0), bucket(2, 0.0), bucket(3, 1.0)]);
    }

    #[test]
    fn trim_keeps_all_zero_series() {
        let all_zero: Vec<_> = (0..5).map(|w| bucket(w, 0.0)).collect();
        assert_eq!(trim_zero_edges(all_zero.clone()), all_zero);
    }

    #[test]
    fn trim_is_idempotent() {
        let once = trim_zero_edges(vec![bucket(0, 0.0), bucket(1, 3.0), bucket(2, 0.0)]);
        let twice = trim_zero_edges(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn trim_of_empty_is_empty() {
        assert_eq!(trim_zero_edges(Vec::new()), Vec::new());
    }
}
