//! Team listing and division grouping.

use std::collections::HashMap;

use log::info;

use super::{
    http::ApiClient,
    types::{to_entities, to_team, Team},
};
use crate::Result;

/// Teams sharing one division, in the order they were fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionGroup {
    pub division: String,
    pub teams: Vec<Team>,
}

/// Stable grouping by `division`.
///
/// Groups come out in first-seen order of their division; teams keep their
/// input order within a group. Duplicated team ids are kept.
pub fn group_by_division(teams: impl IntoIterator<Item = Team>) -> Vec<DivisionGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DivisionGroup> = Vec::new();

    for team in teams {
        let slot = *index.entry(team.division.clone()).or_insert_with(|| {
            groups.push(DivisionGroup {
                division: team.division.clone(),
                teams: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].teams.push(team);
    }

    groups
}

pub async fn fetch_teams(client: &ApiClient) -> Result<Vec<Team>> {
    let raw = client.fetch_all("teams", Vec::new()).await?;
    to_entities(raw, to_team)
}

pub async fn get_grouped_teams(client: &ApiClient) -> Result<Vec<DivisionGroup>> {
    let teams = fetch_teams(client).await?;
    let groups = group_by_division(teams);
    info!("Grouped teams into {} divisions", groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::TeamId;

    fn team(id: u64, abbreviation: &str, division: &str) -> Team {
        Team {
            id: TeamId::new(id),
            abbreviation: abbreviation.to_string(),
            city: String::new(),
            conference: String::new(),
            division: division.to_string(),
            full_name: format!("Team {}", abbreviation),
            name: abbreviation.to_string(),
        }
    }

    fn abbreviations(group: &DivisionGroup) -> Vec<&str> {
        group.teams.iter().map(|t| t.abbreviation.as_str()).collect()
    }

    #[test]
    fn test_group_by_division_is_stable() {
        let groups = group_by_division(vec![
            team(1, "ATL", "Southeast"),
            team(2, "BOS", "Atlantic"),
            team(3, "BKN", "Atlantic"),
            team(5, "CHA", "Southeast"),
            team(20, "NYK", "Atlantic"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].division, "Southeast");
        assert_eq!(abbreviations(&groups[0]), vec!["ATL", "CHA"]);
        assert_eq!(groups[1].division, "Atlantic");
        assert_eq!(abbreviations(&groups[1]), vec!["BOS", "BKN", "NYK"]);
    }

    #[test]
    fn test_group_by_division_keeps_duplicates() {
        let groups = group_by_division(vec![team(2, "BOS", "Atlantic"), team(2, "BOS", "Atlantic")]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].teams.len(), 2);
    }

    #[test]
    fn test_group_by_division_empty() {
        assert!(group_by_division(Vec::new()).is_empty());
    }

    #[test]
    fn test_one_group_per_distinct_division() {
        let divisions = ["Atlantic", "Central", "Southeast", "Northwest", "Pacific", "Southwest"];
        let teams: Vec<Team> = (0..30)
            .map(|i| team(i + 1, &format!("T{}", i), divisions[(i % 6) as usize]))
            .collect();

        let groups = group_by_division(teams);

        assert_eq!(groups.len(), 6);
        assert!(groups.iter().all(|g| g.teams.len() == 5));
    }
}
