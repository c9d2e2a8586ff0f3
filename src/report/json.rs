use crate::aggregate::{team_distribution, KpiSummary};
use crate::model::Result;
use crate::report::Dashboard;
use indexmap::IndexMap;
use serde_json::{to_string_pretty, to_value, Value};

/// Machine-readable dashboard payload. Unlike the markdown report, every
/// section is present regardless of role; consumers filter themselves.
pub trait JsonReport {
    fn to_json(&self) -> Result<String>;
}

impl JsonReport for Dashboard {
    fn to_json(&self) -> Result<String> {
        let summary = KpiSummary::from_series(
            &self.pr_metrics,
            &self.build_metrics,
            &self.code_churn_metrics,
        );
        let distribution: IndexMap<String, usize> =
            team_distribution(&self.developer_stats).into_iter().collect();

        let mut root: IndexMap<String, Value> = IndexMap::new();
        root.insert("role".to_string(), to_value(self.role)?);
        root.insert("summary".to_string(), to_value(&summary)?);
        root.insert("pr_metrics".to_string(), to_value(&self.pr_metrics)?);
        root.insert("build_metrics".to_string(), to_value(&self.build_metrics)?);
        root.insert(
            "code_churn_metrics".to_string(),
            to_value(&self.code_churn_metrics)?,
        );
        root.insert("alerts".to_string(), to_value(&self.alerts)?);
        root.insert(
            "developer_stats".to_string(),
            to_value(&self.developer_stats)?,
        );
        root.insert("team_distribution".to_string(), to_value(&distribution)?);

        Ok(to_string_pretty(&root)?)
    }
}
