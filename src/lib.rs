//! activity-charts
//!
//! A lightweight Rust library for transforming and charting recorded activity
//! metrics (power, speed, elevation, suffer score, …). Pairs with the
//! `activity-charts` CLI.
//!
//! ### Features
//! - Filter a batch of activity records with a per-chart predicate
//! - Color-code scatter points by a categorical field (e.g. gear), most
//!   frequent category first
//! - Aggregate a metric into gap-free, epoch-anchored weekly buckets
//! - Generate SVG/PNG scatter and bar charts from the transformed data
//!
//! ### Example
//! ```no_run
//! use activity_charts::{chart, charts, viz, Activity};
//!
//! let json = std::fs::read_to_string("activities.json")?;
//! let activities: Vec<Activity> = serde_json::from_str(&json)?;
//!
//! let series = chart::scatter_series(&activities, &charts::average_power());
//! viz::plot_scatter(&series, "power.svg", 1000, 600)?;
//!
//! let spec = charts::weekly_suffer_score();
//! let buckets = chart::weekly_series(&activities, &spec, |a| a.suffer_score);
//! viz::plot_weekly_bars(&buckets, spec.title_y, &viz::week_date_label, "suffer.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod charts;
pub mod cluster;
pub mod models;
pub mod viz;
pub mod weekly;

pub use chart::{ChartAdapter, ChartSpec, ScatterPoint, ScatterSeries};
pub use cluster::{CLUSTER_PALETTE, ClusterKey, ClusterOrder};
pub use models::Activity;
pub use weekly::{WEEK_MS, WeekBucket};
