use activity_charts::models::Activity;
use activity_charts::weekly::WEEK_MS;
use activity_charts::{ScatterSeries, chart, charts, viz};
use chrono::{DateTime, Utc};
use tempfile::tempdir;

fn act(id: u64, start_ms: i64, watts: f64) -> Activity {
    Activity {
        id,
        name: String::new(),
        activity_type: Some("Ride".into()),
        start_date: DateTime::<Utc>::from_timestamp_millis(start_ms).unwrap(),
        distance: 20_000.0,
        moving_time: 3000.0,
        elapsed_time: 3200.0,
        total_elevation_gain: 250.0,
        average_speed: 6.6,
        average_watts: Some(watts),
        average_heartrate: Some(145.0),
        suffer_score: Some(40.0),
        gear_id: Some("b1".into()),
    }
}

#[test]
fn render_scatter_svg_and_png() {
    let dir = tempdir().unwrap();
    let acts: Vec<Activity> = (0..5)
        .map(|i| act(i, i as i64 * WEEK_MS, 150.0 + i as f64))
        .collect();
    let series = chart::scatter_series(&acts, &charts::average_power());

    let svg = dir.path().join("power.svg");
    viz::plot_scatter(&series, &svg, 800, 500).unwrap();
    assert!(svg.metadata().unwrap().len() > 0);

    let png = dir.path().join("power.png");
    viz::plot_scatter(&series, &png, 800, 500).unwrap();
    assert!(png.metadata().unwrap().len() > 0);
}

#[test]
fn render_weekly_bars_svg() {
    let dir = tempdir().unwrap();
    let acts: Vec<Activity> = (0..4)
        .map(|i| act(i, i as i64 * WEEK_MS, 150.0))
        .collect();
    let spec = charts::weekly_suffer_score();
    let buckets = chart::weekly_series(&acts, &spec, charts::weekly_suffer_score_value);
    assert_eq!(buckets.len(), 4);

    let out = dir.path().join("suffer.svg");
    viz::plot_weekly_bars(&buckets, spec.title_y, &viz::week_date_label, &out, 800, 500).unwrap();
    assert!(out.metadata().unwrap().len() > 0);
}

#[test]
fn single_point_scatter_still_renders() {
    // Degenerate extents get padded instead of producing an empty range.
    let dir = tempdir().unwrap();
    let series = chart::scatter_series(&[act(1, 12345, 150.0)], &charts::distance());
    let out = dir.path().join("one.svg");
    viz::plot_scatter(&series, &out, 400, 300).unwrap();
    assert!(out.exists());
}

#[test]
fn empty_series_is_an_error() {
    let err = viz::plot_scatter(&ScatterSeries::default(), "unused.svg", 100, 100).unwrap_err();
    assert!(err.to_string().contains("no data"));

    let err = viz::plot_weekly_bars(&[], "", &viz::week_date_label, "unused.svg", 100, 100)
        .unwrap_err();
    assert!(err.to_string().contains("no data"));
}

#[test]
fn file_adapter_draws_through_the_trait() {
    use activity_charts::ChartAdapter;

    let dir = tempdir().unwrap();
    let out = dir.path().join("adapter.svg");
    let mut adapter = viz::FileChartAdapter::new(&out, 640, 400);

    let acts: Vec<Activity> = (0..3)
        .map(|i| act(i, i as i64 * WEEK_MS, 100.0))
        .collect();
    let series = chart::scatter_series(&acts, &charts::elevation_gain());
    adapter.draw_scatter(&series).unwrap();
    assert!(out.exists());
}
