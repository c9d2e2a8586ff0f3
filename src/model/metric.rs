use serde::Serialize;

/// Pull-request activity for one calendar day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PrMetric {
    pub date: String,
    pub prs_opened: u32,
    pub prs_merged: u32,
    pub prs_closed: u32,
    /// Hours.
    pub avg_review_time: u32,
}

/// CI build results for one calendar day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BuildMetric {
    pub date: String,
    pub total_builds: u32,
    pub successful_builds: u32,
    pub failed_builds: u32,
    /// Seconds.
    pub avg_build_time: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CodeChurnMetric {
    pub date: String,
    pub lines_added: u32,
    pub lines_deleted: u32,
    pub files_changed: u32,
    pub commits: u32,
}

// Create
impl BuildMetric {
    /// Successful builds are derived from the total, so the
    /// `successful + failed == total` invariant holds by construction.
    pub fn new(
        date: impl ToString,
        total_builds: u32,
        failed_builds: u32,
        avg_build_time: u32,
    ) -> Self {
        Self {
            date: date.to_string(),
            total_builds,
            successful_builds: total_builds - failed_builds,
            failed_builds,
            avg_build_time,
        }
    }
}
