use crate::generate::Generator;
use crate::model::{Alert, Severity};
use rand::Rng;

/// The illustrative alert feed: one alert per severity tier, anchored to
/// today, yesterday and two days ago. Structure is fixed; only the
/// timestamps depend on the clock.
pub trait AlertFeed {
    fn alerts(&self) -> Vec<Alert>;
}

impl<R: Rng> AlertFeed for Generator<R> {
    fn alerts(&self) -> Vec<Alert> {
        vec![
            Alert::new(
                "1",
                Severity::Critical,
                "Build failure rate exceeded 20% threshold",
                self.timestamp(0),
                "Build Failures",
            ),
            Alert::new(
                "2",
                Severity::Warning,
                "PR review time increased by 40% this week",
                self.timestamp(1),
                "PR Velocity",
            ),
            Alert::new(
                "3",
                Severity::Info,
                "Code churn spike detected in frontend team",
                self.timestamp(2),
                "Code Churn",
            ),
        ]
    }
}
