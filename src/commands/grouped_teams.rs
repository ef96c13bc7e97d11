//! Grouped teams command implementation

use crate::{
    balldontlie::{teams::get_grouped_teams, ApiClient, DivisionGroup},
    Result,
};

/// Handle the grouped teams command
pub async fn handle_grouped_teams(client: &ApiClient) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via integration tests
    let groups = get_grouped_teams(client).await?;
    print!("{}", render_grouped_teams(&groups));
    Ok(())
}

/// Division name, then one tab-indented `full_name (abbreviation)` per team.
pub fn render_grouped_teams(groups: &[DivisionGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&group.division);
        out.push('\n');
        for team in &group.teams {
            out.push_str(&format!("\t{}\n", team.name_with_abbreviation()));
        }
    }
    out
}
