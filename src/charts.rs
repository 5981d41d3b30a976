//! The built-in chart definitions, one per rendered metric.
//!
//! Ratio metrics divide by optional fields; their predicates exclude records
//! where the denominator is absent. A record slipping past the predicate
//! yields a NaN point, which is a configuration error by contract.

use crate::chart::ChartSpec;
use crate::models::Activity;

/// Distance per activity over time.
pub fn distance() -> ChartSpec {
    ChartSpec {
        title_y: "Distance, km",
        ..ChartSpec::new(|a| a.distance / 1000.0)
    }
}

/// Elapsed time per activity, in hours.
pub fn elapsed_time() -> ChartSpec {
    ChartSpec {
        title_y: "Elapsed time, hr",
        ..ChartSpec::new(|a| a.elapsed_time / 60.0 / 60.0)
    }
}

/// Elevation gain per activity.
pub fn elevation_gain() -> ChartSpec {
    ChartSpec {
        title_y: "Elevation gain, m",
        ..ChartSpec::new(|a| a.total_elevation_gain)
    }
}

/// Average power per activity, clustered by gear.
pub fn average_power() -> ChartSpec {
    ChartSpec {
        title_y: "Average power, W",
        predicate: Some(|a| a.average_watts.is_some()),
        cluster_by: Some(|a| a.gear_id.clone()),
        ..ChartSpec::new(|a| a.average_watts.unwrap_or(f64::NAN))
    }
}

/// Average moving speed per activity in km/h, clustered by gear.
pub fn speed() -> ChartSpec {
    ChartSpec {
        title_y: "Speed, km/h",
        predicate: Some(|a| a.moving_time > 0.0),
        cluster_by: Some(|a| a.gear_id.clone()),
        ..ChartSpec::new(|a| a.distance / 1000.0 / (a.moving_time / 60.0 / 60.0))
    }
}

/// Average power divided by average heart rate (power economy), including
/// power-meter estimates.
pub fn power_per_bpm() -> ChartSpec {
    ChartSpec {
        title_y: "Avg power per bpm (including estimates)",
        predicate: Some(|a| a.average_watts.is_some() && a.average_heartrate.is_some()),
        ..ChartSpec::new(|a| {
            a.average_watts.unwrap_or(f64::NAN) / a.average_heartrate.unwrap_or(f64::NAN)
        })
    }
}

/// Average speed divided by average heart rate (aerobic economy).
pub fn speed_per_bpm() -> ChartSpec {
    ChartSpec {
        title_y: "Avg speed per bpm",
        predicate: Some(|a| a.average_heartrate.is_some()),
        ..ChartSpec::new(|a| a.average_speed / a.average_heartrate.unwrap_or(f64::NAN))
    }
}

/// Suffer score summed per week, rendered as bars. Use with
/// [`crate::chart::weekly_series`] and [`weekly_suffer_score_value`].
pub fn weekly_suffer_score() -> ChartSpec {
    ChartSpec {
        title_y: "Weekly suffer score",
        ..ChartSpec::new(|a| a.suffer_score.unwrap_or(f64::NAN))
    }
}

/// Weekly value accessor for the suffer-score bar chart; activities without
/// a score contribute nothing to their week.
pub fn weekly_suffer_score_value(a: &Activity) -> Option<f64> {
    a.suffer_score
}
