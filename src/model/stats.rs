use crate::model::Developer;
use serde::Serialize;

/// Aggregate statistics for one developer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DeveloperStats {
    pub developer: Developer,
    pub pr_velocity: u32,
    /// Integer percentage, 0..=100.
    pub build_success_rate: u32,
    pub code_churn: u32,
    pub active_issues: u32,
}
