//! Entry point: parse CLI and run the lineup report.

use clap::Parser;
use yahoo_ffl::{
    cli::LineupCli,
    commands::lineup_report::{handle_lineup_report, LineupParams},
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = LineupCli::parse();
    init_logging(app.verbose);

    let result = handle_lineup_report(LineupParams {
        week: app.week,
        league_id: app.league_id,
        team: app.team,
        game: app.game,
        token_file: app.token_file,
    })
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
