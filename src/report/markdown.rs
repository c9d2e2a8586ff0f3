use crate::aggregate::{team_distribution, KpiSummary};
use crate::model::{Alert, BuildMetric, CodeChurnMetric, DeveloperStats, PrMetric};
use crate::report::Dashboard;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

pub trait MarkdownReport {
    fn to_markdown(&self) -> String;
}

impl MarkdownReport for Dashboard {
    fn to_markdown(&self) -> String {
        let mut doc = Markdown::new();

        doc.header1("NexusMetrics");
        doc.paragraph(format!(
            "Welcome, {}! {}",
            self.role.title(),
            self.role.greeting()
        ));

        doc.add_alerts(&self.alerts);
        doc.add_summary(&KpiSummary::from_series(
            &self.pr_metrics,
            &self.build_metrics,
            &self.code_churn_metrics,
        ));
        doc.add_pr_metrics(&self.pr_metrics);
        doc.add_build_metrics(&self.build_metrics);
        doc.add_code_churn(&self.code_churn_metrics);

        if self.role.sees_developer_table() {
            doc.add_developer_table(&self.developer_stats);
        }
        if self.role.sees_team_distribution() {
            doc.add_team_distribution(&self.developer_stats);
        }

        doc.render()
    }
}

/// Axis-style date label: drop the `YYYY-` prefix.
fn axis_label(date: &str) -> &str {
    date.get(5..).unwrap_or(date)
}

trait MarkdownExt {
    fn add_alerts(&mut self, alerts: &[Alert]);
    fn add_summary(&mut self, summary: &KpiSummary);
    fn add_pr_metrics(&mut self, metrics: &[PrMetric]);
    fn add_build_metrics(&mut self, metrics: &[BuildMetric]);
    fn add_code_churn(&mut self, metrics: &[CodeChurnMetric]);
    fn add_developer_table(&mut self, stats: &[DeveloperStats]);
    fn add_team_distribution(&mut self, stats: &[DeveloperStats]);
    fn add_table(&mut self, headings: Vec<&str>, rows: Vec<Vec<String>>);
}

impl MarkdownExt for Markdown {
    fn add_alerts(&mut self, alerts: &[Alert]) {
        self.header2("Active Alerts");
        let rows = alerts
            .iter()
            .map(|alert| {
                vec![
                    format!("**{}**", alert.severity),
                    alert.timestamp.clone(),
                    alert.metric.clone(),
                    alert.message.clone(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(vec!["Severity", "When", "Metric", "Message"], rows);
    }

    fn add_summary(&mut self, summary: &KpiSummary) {
        self.header2("Key Metrics");
        let row = vec![
            format!("{} merged today", summary.prs_merged_today),
            format!("{}%", summary.build_success_rate),
            format!("{} commits today", summary.commits_today),
            format!("{}h", summary.avg_review_time),
        ];
        self.add_table(
            vec![
                "PR Velocity",
                "Build Success Rate",
                "Code Churn",
                "Avg Review Time",
            ],
            vec![row],
        );
    }

    fn add_pr_metrics(&mut self, metrics: &[PrMetric]) {
        self.header2("PR Velocity Trends");
        let rows = metrics
            .iter()
            .map(|m| {
                vec![
                    axis_label(&m.date).to_string(),
                    m.prs_opened.to_string(),
                    m.prs_merged.to_string(),
                    m.prs_closed.to_string(),
                    format!("{}h", m.avg_review_time),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(
            vec!["Date", "Opened", "Merged", "Closed", "Avg Review"],
            rows,
        );
    }

    fn add_build_metrics(&mut self, metrics: &[BuildMetric]) {
        self.header2("Build Success & Failure Rates");
        let rows = metrics
            .iter()
            .map(|m| {
                vec![
                    axis_label(&m.date).to_string(),
                    m.total_builds.to_string(),
                    m.successful_builds.to_string(),
                    m.failed_builds.to_string(),
                    format!("{}s", m.avg_build_time),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(
            vec!["Date", "Total", "Successful", "Failed", "Avg Build"],
            rows,
        );
    }

    fn add_code_churn(&mut self, metrics: &[CodeChurnMetric]) {
        self.header2("Code Churn Analysis");
        let rows = metrics
            .iter()
            .map(|m| {
                vec![
                    axis_label(&m.date).to_string(),
                    format!("+{}", m.lines_added),
                    format!("-{}", m.lines_deleted),
                    m.files_changed.to_string(),
                    m.commits.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(
            vec!["Date", "Added", "Deleted", "Files", "Commits"],
            rows,
        );
    }

    fn add_developer_table(&mut self, stats: &[DeveloperStats]) {
        self.header2("Team Performance Overview");
        let rows = stats
            .iter()
            .map(|stat| {
                vec![
                    format!("**{}** ({})", stat.developer.name, stat.developer.avatar),
                    stat.developer.team.clone(),
                    stat.pr_velocity.to_string(),
                    format!("{}%", stat.build_success_rate),
                    stat.code_churn.to_string(),
                    stat.active_issues.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(
            vec![
                "Developer",
                "Team",
                "PR Velocity",
                "Build Success",
                "Code Churn",
                "Active Issues",
            ],
            rows,
        );
    }

    fn add_team_distribution(&mut self, stats: &[DeveloperStats]) {
        self.header2("Team Distribution");
        let total = stats.len().max(1);
        let rows = team_distribution(stats)
            .into_iter()
            .map(|(team, count)| {
                let percent = count as f64 / total as f64 * 100.0;
                vec![team, count.to_string(), format!("{percent:.0}%")]
            })
            .collect::<Vec<_>>();
        self.add_table(vec!["Team", "Developers", "Share"], rows);
    }

    fn add_table(&mut self, headings: Vec<&str>, rows: Vec<Vec<String>>) {
        let headings = headings
            .into_iter()
            .map(|h| Heading::new(h.to_string(), Some(HeadingAlignment::Center)))
            .collect::<Vec<_>>();
        let mut table = MarkdownTable::new(rows);
        table.with_headings(headings);
        self.paragraph(table.as_markdown().unwrap());
    }
}
