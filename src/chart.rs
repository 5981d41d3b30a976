//! Per-chart configuration and the transformation pipeline that feeds a
//! [`ChartAdapter`]: filter, X/Y extraction, cluster coloring, weekly
//! aggregation.

use crate::cluster::{CLUSTER_PALETTE, ClusterKey, ClusterOrder};
use crate::models::Activity;
use crate::weekly::{self, WeekBucket};
use anyhow::Result;
use plotters::style::RGBColor;

pub type CalcX = fn(&Activity) -> i64;
pub type CalcY = fn(&Activity) -> f64;
pub type Predicate = fn(&Activity) -> bool;
pub type ClusterBy = fn(&Activity) -> ClusterKey;

/// Declarative definition of one chart. Pure configuration: the pipeline's
/// behavior is fully determined by which fields are supplied.
///
/// Only `calc_y` is mandatory. Defaults for the rest:
/// - `title_y`: empty string
/// - `calc_x`: activity start timestamp (epoch ms)
/// - `predicate`: accept every record
/// - `cluster_by`: constant `None`, i.e. a single cluster sharing the first
///   palette color
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub title_y: &'static str,
    pub calc_x: Option<CalcX>,
    pub calc_y: CalcY,
    pub predicate: Option<Predicate>,
    pub cluster_by: Option<ClusterBy>,
}

impl ChartSpec {
    pub fn new(calc_y: CalcY) -> Self {
        ChartSpec {
            title_y: "",
            calc_x: None,
            calc_y,
            predicate: None,
            cluster_by: None,
        }
    }

    /// X value with the default applied.
    pub fn x_of(&self, activity: &Activity) -> i64 {
        match self.calc_x {
            Some(calc_x) => calc_x(activity),
            None => activity.start_ms(),
        }
    }

    /// Predicate with the default applied.
    pub fn accepts(&self, activity: &Activity) -> bool {
        self.predicate.map_or(true, |p| p(activity))
    }

    /// Cluster key with the default applied.
    pub fn key_of(&self, activity: &Activity) -> ClusterKey {
        self.cluster_by.and_then(|c| c(activity))
    }
}

/// Keep the records `predicate` accepts, preserving input order.
pub fn filter<'a, P>(records: &'a [Activity], predicate: P) -> Vec<&'a Activity>
where
    P: Fn(&Activity) -> bool,
{
    records.iter().filter(|a| predicate(a)).collect()
}

/// One scatter point, ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Upstream activity id, for click-through from the rendered point.
    pub activity_id: u64,
    pub x_ms: i64,
    pub y: f64,
    pub color: RGBColor,
}

/// Output of the scatter pipeline: filtered points plus the cluster order
/// they were colored by.
#[derive(Debug, Clone, Default)]
pub struct ScatterSeries {
    pub title_y: &'static str,
    pub points: Vec<ScatterPoint>,
    pub clusters: ClusterOrder,
}

/// Run the scatter pipeline: filter, build the cluster order over the
/// surviving records, emit one colored `(x, y)` point per record.
///
/// A non-finite Y (e.g. a ratio metric whose denominator the predicate
/// failed to exclude) propagates untouched; that is a chart-configuration
/// error, not a pipeline fault.
pub fn scatter_series(records: &[Activity], spec: &ChartSpec) -> ScatterSeries {
    let filtered = filter(records, |a| spec.accepts(a));
    let clusters = ClusterOrder::build(filtered.iter().map(|a| spec.key_of(a)));
    let points = filtered
        .iter()
        .map(|a| ScatterPoint {
            activity_id: a.id,
            x_ms: spec.x_of(a),
            y: (spec.calc_y)(a),
            color: clusters.color_of(&spec.key_of(a), &CLUSTER_PALETTE),
        })
        .collect();
    ScatterSeries {
        title_y: spec.title_y,
        points,
        clusters,
    }
}

/// Run the bar-chart pipeline: filter with the spec's predicate, then
/// aggregate `value_of` into trimmed weekly buckets.
pub fn weekly_series<F>(records: &[Activity], spec: &ChartSpec, value_of: F) -> Vec<WeekBucket>
where
    F: Fn(&Activity) -> Option<f64>,
{
    weekly::aggregate(filter(records, |a| spec.accepts(a)), value_of)
}

/// The rendering collaborator. The pipeline hands it fully transformed data;
/// axis scaling, drawing, and interaction are its business alone.
pub trait ChartAdapter {
    fn draw_scatter(&mut self, series: &ScatterSeries) -> Result<()>;

    /// `label_of` turns a week-start timestamp into the human label shown on
    /// the axis (and tooltips, where the backend has them).
    fn draw_weekly_bars(
        &mut self,
        buckets: &[WeekBucket],
        title_y: &str,
        label_of: &dyn Fn(i64) -> String,
    ) -> Result<()>;
}
