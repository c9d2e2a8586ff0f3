use crate::model::{BuildMetric, CodeChurnMetric, PrMetric};
use serde::Serialize;

/// Headline numbers for the dashboard cards, derived from the latest
/// record of each series. Empty series fall back to typed zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub prs_merged_today: u32,
    pub build_success_rate: f64,
    pub commits_today: u32,
    /// Hours.
    pub avg_review_time: u32,
}

impl KpiSummary {
    pub fn from_series(
        pr_metrics: &[PrMetric],
        build_metrics: &[BuildMetric],
        code_churn_metrics: &[CodeChurnMetric],
    ) -> Self {
        let latest_pr = pr_metrics.last();
        Self {
            prs_merged_today: latest_pr.map_or(0, |m| m.prs_merged),
            build_success_rate: build_success_rate(build_metrics),
            commits_today: code_churn_metrics.last().map_or(0, |m| m.commits),
            avg_review_time: latest_pr.map_or(0, |m| m.avg_review_time),
        }
    }
}

/// Success percentage of the latest build record, rounded to one decimal
/// place. An empty series yields `0.0`.
pub fn build_success_rate(build_metrics: &[BuildMetric]) -> f64 {
    match build_metrics.last() {
        Some(latest) => {
            let rate =
                f64::from(latest.successful_builds) / f64::from(latest.total_builds) * 100.0;
            (rate * 10.0).round() / 10.0
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_of_latest_record() {
        let series = vec![
            BuildMetric::new("2024-02-29", 40, 4, 200),
            BuildMetric::new("2024-03-01", 69, 10, 240),
        ];
        assert_eq!(build_success_rate(&series), 85.5);
    }

    #[test]
    fn empty_series_yields_zero_rate() {
        assert_eq!(build_success_rate(&[]), 0.0);
    }

    #[test]
    fn summary_takes_latest_of_each_series() {
        let pr = vec![
            PrMetric {
                date: "2024-02-29".to_string(),
                prs_opened: 5,
                prs_merged: 3,
                prs_closed: 1,
                avg_review_time: 2,
            },
            PrMetric {
                date: "2024-03-01".to_string(),
                prs_opened: 12,
                prs_merged: 9,
                prs_closed: 2,
                avg_review_time: 14,
            },
        ];
        let builds = vec![BuildMetric::new("2024-03-01", 50, 5, 300)];
        let churn = vec![CodeChurnMetric {
            date: "2024-03-01".to_string(),
            lines_added: 500,
            lines_deleted: 200,
            files_changed: 12,
            commits: 8,
        }];
        let summary = KpiSummary::from_series(&pr, &builds, &churn);
        assert_eq!(summary.prs_merged_today, 9);
        assert_eq!(summary.build_success_rate, 90.0);
        assert_eq!(summary.commits_today, 8);
        assert_eq!(summary.avg_review_time, 14);
    }

    #[test]
    fn summary_falls_back_to_zeros() {
        let summary = KpiSummary::from_series(&[], &[], &[]);
        assert_eq!(summary.prs_merged_today, 0);
        assert_eq!(summary.build_success_rate, 0.0);
        assert_eq!(summary.commits_today, 0);
        assert_eq!(summary.avg_review_time, 0);
    }
}
