//! Lineup report command implementation

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use tracing::{debug, info};

use crate::{
    auth::OAuthSession,
    cli::{prompt::prompt_for_week, types::LeagueKey},
    core::default_token_path,
    error::FflError,
    lineup::{fetch_projections, render_report, resolve_team, teams_by_name, LineupReport},
    yahoo::{TeamEntry, YahooClient},
    LeagueId, Result, Week, TEAM_NAME_ENV_VAR,
};

use super::{resolve_league_id, resolve_team_name};

/// Parameters for the lineup report command
#[derive(Debug, Clone)]
pub struct LineupParams {
    pub week: Option<Week>,
    pub league_id: Option<LeagueId>,
    pub team: Option<String>,
    pub game: String,
    pub token_file: Option<PathBuf>,
}

/// Handle the lineup report command
pub async fn handle_lineup_report(params: LineupParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;
    let team_name = resolve_team_name(params.team)?;
    let league = LeagueKey::new(params.game, league_id);

    let token_path = params.token_file.unwrap_or_else(default_token_path);
    debug!(path = %token_path.display(), "loading OAuth token");
    let mut session = OAuthSession::load(&token_path)?;

    // tarpaulin::skip - network call, tested via integration tests
    let client = YahooClient::new(session.ensure_fresh().await?)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_lineup_report(
        &client,
        &league,
        &team_name,
        params.week,
        stdin.lock(),
        &mut stdout,
    )
    .await
}

/// Resolve the team, pull its roster and print the evaluated lineup.
///
/// `input` is only read when `week` is `None`.
pub async fn run_lineup_report<R: BufRead, W: Write>(
    client: &YahooClient,
    league: &LeagueKey,
    team_name: &str,
    week: Option<Week>,
    input: R,
    output: &mut W,
) -> Result<()> {
    let teams = client.league_teams(league).await?;
    let Some((team, tier)) = resolve_team(&teams, team_name) else {
        write_team_listing(output, &teams)?;
        return Err(FflError::TeamNotFound {
            name: team_name.to_string(),
        });
    };
    debug!(team = %team.team_key, tier = ?tier, "team resolved");

    writeln!(
        output,
        "Using team: {} ({}) in league {}",
        team.name,
        team.team_key,
        league.league_id()
    )?;

    let week = match week {
        Some(week) => Some(week),
        None => prompt_for_week(input, &mut *output),
    };
    match week {
        Some(week) => info!(week = %week, "evaluating lineup"),
        None => info!("no week selected; using Yahoo's current roster week"),
    }

    let players = client.team_roster(&team.team_key, week).await?;
    let projections = fetch_projections(client, league, &players, week).await;
    let report = LineupReport::build(players, projections);

    write!(output, "{}", render_report(&report))?;
    output.flush()?;
    Ok(())
}

fn write_team_listing<W: Write>(output: &mut W, teams: &[TeamEntry]) -> Result<()> {
    writeln!(
        output,
        "Couldn't auto-find your team. Here are the teams in the league:\n"
    )?;
    for team in teams_by_name(teams) {
        writeln!(output, "- {:40} ({})", team.name, team.team_key)?;
    }
    writeln!(
        output,
        "\nRe-run with --team \"<exact team name>\" or set {TEAM_NAME_ENV_VAR}."
    )?;
    Ok(())
}
