use crate::generate::Generator;
use crate::model::{BuildMetric, CodeChurnMetric, PrMetric};
use rand::Rng;
use std::ops::RangeInclusive;

const PRS_OPENED: RangeInclusive<u32> = 5..=19;
const PRS_MERGED: RangeInclusive<u32> = 3..=14;
const PRS_CLOSED: RangeInclusive<u32> = 1..=3;
const AVG_REVIEW_TIME: RangeInclusive<u32> = 2..=25;

// Failed builds never exceed the total: max 10 < min total 20.
const TOTAL_BUILDS: RangeInclusive<u32> = 20..=69;
const FAILED_BUILDS: RangeInclusive<u32> = 1..=10;
const AVG_BUILD_TIME: RangeInclusive<u32> = 120..=419;

const LINES_ADDED: RangeInclusive<u32> = 200..=1199;
const LINES_DELETED: RangeInclusive<u32> = 100..=599;
const FILES_CHANGED: RangeInclusive<u32> = 5..=34;
const COMMITS: RangeInclusive<u32> = 3..=22;

/// Day-ordered metric series, oldest first, newest date = today.
/// `days == 0` yields an empty series.
pub trait MetricSeries {
    fn pr_metrics(&mut self, days: u32) -> Vec<PrMetric>;
    fn build_metrics(&mut self, days: u32) -> Vec<BuildMetric>;
    fn code_churn_metrics(&mut self, days: u32) -> Vec<CodeChurnMetric>;
}

impl<R: Rng> MetricSeries for Generator<R> {
    fn pr_metrics(&mut self, days: u32) -> Vec<PrMetric> {
        let mut metrics = Vec::new();
        for back in (0..days).rev() {
            metrics.push(PrMetric {
                date: self.day(back),
                prs_opened: self.rng.random_range(PRS_OPENED),
                prs_merged: self.rng.random_range(PRS_MERGED),
                prs_closed: self.rng.random_range(PRS_CLOSED),
                avg_review_time: self.rng.random_range(AVG_REVIEW_TIME),
            });
        }
        metrics
    }

    fn build_metrics(&mut self, days: u32) -> Vec<BuildMetric> {
        let mut metrics = Vec::new();
        for back in (0..days).rev() {
            let date = self.day(back);
            let total_builds = self.rng.random_range(TOTAL_BUILDS);
            let failed_builds = self.rng.random_range(FAILED_BUILDS);
            let avg_build_time = self.rng.random_range(AVG_BUILD_TIME);
            metrics.push(BuildMetric::new(
                date,
                total_builds,
                failed_builds,
                avg_build_time,
            ));
        }
        metrics
    }

    fn code_churn_metrics(&mut self, days: u32) -> Vec<CodeChurnMetric> {
        let mut metrics = Vec::new();
        for back in (0..days).rev() {
            metrics.push(CodeChurnMetric {
                date: self.day(back),
                lines_added: self.rng.random_range(LINES_ADDED),
                lines_deleted: self.rng.random_range(LINES_DELETED),
                files_changed: self.rng.random_range(FILES_CHANGED),
                commits: self.rng.random_range(COMMITS),
            });
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator(seed: u64) -> Generator<ChaCha8Rng> {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        Generator::with_parts(ChaCha8Rng::seed_from_u64(seed), now)
    }

    #[test]
    fn one_record_per_requested_day() {
        let mut generator = generator(42);
        assert_eq!(generator.pr_metrics(30).len(), 30);
        assert_eq!(generator.build_metrics(7).len(), 7);
        assert_eq!(generator.code_churn_metrics(1).len(), 1);
        assert!(generator.pr_metrics(0).is_empty());
    }

    #[test]
    fn dates_ascend_one_calendar_day_and_end_today() {
        let mut generator = generator(42);
        let metrics = generator.pr_metrics(31);
        assert_eq!(metrics.first().unwrap().date, "2024-01-31");
        assert_eq!(metrics.last().unwrap().date, "2024-03-01");
        for pair in metrics.windows(2) {
            let previous = NaiveDate::parse_from_str(&pair[0].date, "%Y-%m-%d").unwrap();
            let next = NaiveDate::parse_from_str(&pair[1].date, "%Y-%m-%d").unwrap();
            assert_eq!(previous + Days::new(1), next);
        }
    }

    #[test]
    fn pr_fields_stay_in_range() {
        let mut generator = generator(7);
        for metric in generator.pr_metrics(60) {
            assert!(PRS_OPENED.contains(&metric.prs_opened));
            assert!(PRS_MERGED.contains(&metric.prs_merged));
            assert!(PRS_CLOSED.contains(&metric.prs_closed));
            assert!(AVG_REVIEW_TIME.contains(&metric.avg_review_time));
        }
    }

    #[test]
    fn build_totals_balance_and_stay_in_range() {
        let mut generator = generator(7);
        for metric in generator.build_metrics(60) {
            assert_eq!(
                metric.successful_builds + metric.failed_builds,
                metric.total_builds
            );
            assert!(metric.successful_builds >= 10);
            assert!(TOTAL_BUILDS.contains(&metric.total_builds));
            assert!(FAILED_BUILDS.contains(&metric.failed_builds));
            assert!(AVG_BUILD_TIME.contains(&metric.avg_build_time));
        }
    }

    #[test]
    fn churn_fields_stay_in_range() {
        let mut generator = generator(7);
        for metric in generator.code_churn_metrics(60) {
            assert!(LINES_ADDED.contains(&metric.lines_added));
            assert!(LINES_DELETED.contains(&metric.lines_deleted));
            assert!(FILES_CHANGED.contains(&metric.files_changed));
            assert!(COMMITS.contains(&metric.commits));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut first = generator(42);
        let mut second = generator(42);
        assert_eq!(first.pr_metrics(30), second.pr_metrics(30));
        assert_eq!(first.build_metrics(30), second.build_metrics(30));
        assert_eq!(first.code_churn_metrics(30), second.code_churn_metrics(30));
    }
}
