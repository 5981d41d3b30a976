use activity_charts::models::Activity;
use activity_charts::{chart, charts, viz};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "activity-charts",
    version,
    about = "Render activity metrics as scatter or weekly bar charts"
)]
struct Cli {
    /// JSON file holding an array of activity records (e.g. an exported
    /// activity list).
    #[arg(short, long)]
    input: PathBuf,
    /// Which chart to render.
    #[arg(short, long, value_enum)]
    chart: ChartKind,
    /// Output image path (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartKind {
    Distance,
    ElapsedTime,
    ElevationGain,
    AveragePower,
    Speed,
    PowerPerBpm,
    SpeedPerBpm,
    WeeklySufferScore,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;
    let activities: Vec<Activity> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", cli.input.display()))?;

    match cli.chart {
        ChartKind::WeeklySufferScore => {
            let spec = charts::weekly_suffer_score();
            let buckets =
                chart::weekly_series(&activities, &spec, charts::weekly_suffer_score_value);
            viz::plot_weekly_bars(
                &buckets,
                spec.title_y,
                &viz::week_date_label,
                &cli.out,
                cli.width,
                cli.height,
            )?;
        }
        kind => {
            let spec = match kind {
                ChartKind::Distance => charts::distance(),
                ChartKind::ElapsedTime => charts::elapsed_time(),
                ChartKind::ElevationGain => charts::elevation_gain(),
                ChartKind::AveragePower => charts::average_power(),
                ChartKind::Speed => charts::speed(),
                ChartKind::PowerPerBpm => charts::power_per_bpm(),
                ChartKind::SpeedPerBpm => charts::speed_per_bpm(),
                ChartKind::WeeklySufferScore => unreachable!(),
            };
            let series = chart::scatter_series(&activities, &spec);
            viz::plot_scatter(&series, &cli.out, cli.width, cli.height)?;
        }
    }

    eprintln!("Wrote plot to {}", cli.out.display());
    Ok(())
}
