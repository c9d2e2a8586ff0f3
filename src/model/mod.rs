mod alert;
mod developer;
mod metric;
mod result;
mod role;
mod stats;

pub use alert::Alert;
pub use alert::Severity;
pub use developer::Developer;
pub use metric::BuildMetric;
pub use metric::CodeChurnMetric;
pub use metric::PrMetric;
pub use result::Result;
pub use role::UserRole;
pub use stats::DeveloperStats;
