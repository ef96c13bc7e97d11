//! Season team statistics command implementation

use std::path::Path;

use crate::{
    balldontlie::{games::get_season_stats, ApiClient},
    cli::types::{OutputFormat, Season},
    export::write_stats,
    Result,
};

/// Handle the teams stats command
pub async fn handle_teams_stats(
    client: &ApiClient,
    season: Season,
    output: OutputFormat,
    out_dir: &Path,
) -> Result<()> {
    println!("Fetching stats for season {}", season);

    // tarpaulin::skip - HTTP call, tested via integration tests
    let stats = get_season_stats(client, season).await?;

    if let Some(path) = write_stats(&stats, output, out_dir)? {
        println!("Wrote stats to {}", path.display());
    }

    Ok(())
}
