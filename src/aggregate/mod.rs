mod summary;
mod team;

pub use summary::build_success_rate;
pub use summary::KpiSummary;
pub use team::team_distribution;
