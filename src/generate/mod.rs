mod alert;
mod generator;
mod metric;
mod stats;

pub use alert::AlertFeed;
pub use generator::Generator;
pub use metric::MetricSeries;
pub use stats::StatsGenerator;
