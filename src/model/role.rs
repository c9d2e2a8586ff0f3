use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The viewer's organizational perspective. Selects which dashboard
/// sections are rendered; has no effect on data generation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Developer,
    TeamLead,
    Manager,
}

impl UserRole {
    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Developer => "Developer",
            UserRole::TeamLead => "Team Lead",
            UserRole::Manager => "Manager",
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            UserRole::Developer => "Track your personal metrics and team performance.",
            UserRole::TeamLead => {
                "Monitor your team's productivity and identify bottlenecks."
            }
            UserRole::Manager => {
                "Get comprehensive insights across all teams and projects."
            }
        }
    }

    pub fn sees_developer_table(&self) -> bool {
        matches!(self, UserRole::TeamLead | UserRole::Manager)
    }

    pub fn sees_team_distribution(&self) -> bool {
        matches!(self, UserRole::Manager)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserRole::Developer => "developer",
            UserRole::TeamLead => "team-lead",
            UserRole::Manager => "manager",
        };
        f.write_str(name)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(UserRole::Developer),
            "team-lead" => Ok(UserRole::TeamLead),
            "manager" => Ok(UserRole::Manager),
            other => Err(format!(
                "Unknown role: `{other}` (expected developer, team-lead or manager)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_role_names() {
        assert_eq!("developer".parse::<UserRole>().unwrap(), UserRole::Developer);
        assert_eq!("team-lead".parse::<UserRole>().unwrap(), UserRole::TeamLead);
        assert_eq!("manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_gates_dashboard_sections() {
        assert!(!UserRole::Developer.sees_developer_table());
        assert!(UserRole::TeamLead.sees_developer_table());
        assert!(!UserRole::TeamLead.sees_team_distribution());
        assert!(UserRole::Manager.sees_developer_table());
        assert!(UserRole::Manager.sees_team_distribution());
    }
}
