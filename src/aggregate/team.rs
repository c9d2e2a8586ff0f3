use crate::model::DeveloperStats;
use itertools::Itertools;

/// Developer count per team, in first-appearance order.
pub fn team_distribution(stats: &[DeveloperStats]) -> Vec<(String, usize)> {
    stats
        .iter()
        .map(|stat| &stat.developer.team)
        .unique()
        .map(|team| {
            let count = stats
                .iter()
                .filter(|stat| &stat.developer.team == team)
                .count();
            (team.clone(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Developer;

    fn stats_for(roster: Vec<Developer>) -> Vec<DeveloperStats> {
        roster
            .into_iter()
            .map(|developer| DeveloperStats {
                developer,
                pr_velocity: 30,
                build_success_rate: 85,
                code_churn: 2000,
                active_issues: 4,
            })
            .collect()
    }

    #[test]
    fn counts_reference_roster_teams_in_order() {
        let stats = stats_for(Developer::reference());
        let distribution = team_distribution(&stats);
        assert_eq!(
            distribution,
            vec![
                ("Frontend".to_string(), 2),
                ("Backend".to_string(), 2),
                ("DevOps".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_stats_yield_empty_distribution() {
        assert!(team_distribution(&[]).is_empty());
    }
}
