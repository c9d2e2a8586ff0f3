mod json;
mod markdown;

pub use json::JsonReport;
pub use markdown::MarkdownReport;

use crate::model::{Alert, BuildMetric, CodeChurnMetric, DeveloperStats, PrMetric, UserRole};

/// Everything one dashboard render consumes: the viewer role plus the
/// generated series. Built once per invocation and handed to a report.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub role: UserRole,
    pub pr_metrics: Vec<PrMetric>,
    pub build_metrics: Vec<BuildMetric>,
    pub code_churn_metrics: Vec<CodeChurnMetric>,
    pub alerts: Vec<Alert>,
    pub developer_stats: Vec<DeveloperStats>,
}
