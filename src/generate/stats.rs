use crate::generate::Generator;
use crate::model::{Developer, DeveloperStats};
use rand::Rng;
use std::ops::RangeInclusive;

const PR_VELOCITY: RangeInclusive<u32> = 10..=59;
const BUILD_SUCCESS_RATE: RangeInclusive<u32> = 75..=94;
const CODE_CHURN: RangeInclusive<u32> = 1000..=5999;
const ACTIVE_ISSUES: RangeInclusive<u32> = 2..=16;

/// One statistics record per roster entry, in roster order.
pub trait StatsGenerator {
    fn developer_stats(&mut self, roster: &[Developer]) -> Vec<DeveloperStats>;
}

impl<R: Rng> StatsGenerator for Generator<R> {
    fn developer_stats(&mut self, roster: &[Developer]) -> Vec<DeveloperStats> {
        roster
            .iter()
            .map(|developer| DeveloperStats {
                developer: developer.clone(),
                pr_velocity: self.rng.random_range(PR_VELOCITY),
                build_success_rate: self.rng.random_range(BUILD_SUCCESS_RATE),
                code_churn: self.rng.random_range(CODE_CHURN),
                active_issues: self.rng.random_range(ACTIVE_ISSUES),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator() -> Generator<ChaCha8Rng> {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        Generator::with_parts(ChaCha8Rng::seed_from_u64(42), now)
    }

    #[test]
    fn one_record_per_developer_in_roster_order() {
        let roster = Developer::reference();
        let stats = generator().developer_stats(&roster);
        assert_eq!(stats.len(), roster.len());
        for (stat, developer) in stats.iter().zip(&roster) {
            assert_eq!(&stat.developer, developer);
        }
    }

    #[test]
    fn stats_fields_stay_in_range() {
        let roster = Developer::reference();
        let mut generator = generator();
        for _ in 0..20 {
            for stat in generator.developer_stats(&roster) {
                assert!(PR_VELOCITY.contains(&stat.pr_velocity));
                assert!(BUILD_SUCCESS_RATE.contains(&stat.build_success_rate));
                assert!(CODE_CHURN.contains(&stat.code_churn));
                assert!(ACTIVE_ISSUES.contains(&stat.active_issues));
            }
        }
    }
}
