//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaCli},
    commands::{
        grouped_teams::handle_grouped_teams, players_stats::handle_players_stats,
        teams_stats::handle_teams_stats,
    },
    ApiClient, LOG_ENV_VAR,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV_VAR, "info")).init();

    let app = NbaCli::parse();
    let client = ApiClient::from_env(app.api_uri).context("Failed to configure API client")?;
    log::debug!("Using API base {}", client.base_url());

    match app.command {
        Commands::GroupedTeams => handle_grouped_teams(&client)
            .await
            .context("Failed to list teams")?,

        Commands::PlayersStats { name } => handle_players_stats(&client, &name)
            .await
            .with_context(|| format!("Failed to look up players named '{}'", name))?,

        Commands::TeamsStats {
            season,
            output,
            out_dir,
        } => handle_teams_stats(&client, season, output, &out_dir)
            .await
            .with_context(|| format!("Failed to export stats for season {}", season))?,
    }

    Ok(())
}
