mod aggregate;
mod generate;
mod model;
mod report;

use crate::generate::{AlertFeed, Generator, MetricSeries, StatsGenerator};
use crate::report::{Dashboard, JsonReport, MarkdownReport};
use clap::Parser;
use model::{Developer, Result, UserRole};
use std::fs;

#[derive(Parser, Debug, Clone)]
struct Args {
    /// How many days of history to synthesize.
    #[arg(long, default_value_t = 30)]
    days: u32,
    /// Viewer role: developer, team-lead or manager.
    #[arg(long, default_value = "developer")]
    role: String,
    /// Seed for reproducible output; omit for fresh numbers each run.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional developer roster JSON, replaces the built-in five.
    #[arg(long = "developers")]
    developers_path: Option<String>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<String>,
    /// Output format: markdown or json.
    #[arg(long, default_value = "markdown")]
    format: String,
}

fn main() {
    let args = Args::parse();
    run(&args).unwrap()
}

fn run(args: &Args) -> Result<()> {
    let role: UserRole = args.role.parse()?;
    let roster = match &args.developers_path {
        Some(path) => Developer::from_config(path)?,
        None => Developer::reference(),
    };

    // One generation per invocation; rendering reuses the same data.
    let mut generator = Generator::new(args.seed);
    let dashboard = Dashboard {
        role,
        pr_metrics: generator.pr_metrics(args.days),
        build_metrics: generator.build_metrics(args.days),
        code_churn_metrics: generator.code_churn_metrics(args.days),
        alerts: generator.alerts(),
        developer_stats: generator.developer_stats(&roster),
    };

    let rendered = match args.format.as_str() {
        "markdown" => dashboard.to_markdown(),
        "json" => dashboard.to_json()?,
        other => return Err(format!("Unknown format: `{other}`").into()),
    };

    match &args.out {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
