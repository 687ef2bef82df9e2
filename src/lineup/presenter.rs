//! Plain-text report rendering.

use std::fmt::Write;

use super::{advisor::Projections, LineupReport};
use crate::yahoo::Player;

/// Longest cell value printed, in characters.
pub const MAX_CELL_WIDTH: usize = 80;

pub const ROSTER_COLUMNS: [&str; 6] = ["Slot", "Player", "Team", "Status", "Bye", "Proj"];

pub const NO_PROJECTIONS_NOTICE: &str =
    "(No projections available via API; printed roster and flags only.)";

/// One table row: a cell per column.
pub type Row = Vec<String>;

fn truncate(value: &str) -> String {
    value.chars().take(MAX_CELL_WIDTH).collect()
}

fn pad(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}

/// Render a titled table: `(none)` when empty, otherwise header, rule and
/// one line per row with columns padded to their widest cell.
pub fn render_table(title: &str, columns: &[&str], rows: &[Row]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {title} ===");
    if rows.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| truncate(cell)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(column, *width))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | "));

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in &cells {
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| pad(row.get(i).map(String::as_str).unwrap_or_default(), *width))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | "));
    }
    out
}

/// Table row for a roster player.
pub fn roster_row(player: &Player, projections: &Projections) -> Row {
    vec![
        player.selected_position.clone().unwrap_or_default(),
        player.name.clone().unwrap_or_default(),
        player.team_abbr.clone().unwrap_or_default(),
        player.status.clone().unwrap_or_default(),
        player.bye_week.map(|w| w.to_string()).unwrap_or_default(),
        projections
            .get(player.player_id)
            .map(|points| format!("{points:.2}"))
            .unwrap_or_default(),
    ]
}

/// The full report: starters, bench, warnings, then suggestions or the
/// no-projections notice.
pub fn render_report(report: &LineupReport) -> String {
    let rows = |players: &[Player]| -> Vec<Row> {
        players
            .iter()
            .map(|p| roster_row(p, &report.projections))
            .collect()
    };

    let mut out = String::new();
    out.push_str(&render_table(
        "Starters",
        &ROSTER_COLUMNS,
        &rows(&report.lineup.starters),
    ));
    out.push_str(&render_table(
        "Bench",
        &ROSTER_COLUMNS,
        &rows(&report.lineup.bench),
    ));

    if !report.warnings.is_empty() {
        out.push_str("\n=== Flags & Warnings ===\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }

    match &report.suggestions {
        Some(suggestions) => {
            out.push_str("\n=== Suggestions (based on available projections) ===\n");
            for suggestion in suggestions {
                let _ = writeln!(out, "{suggestion}");
            }
        }
        None => {
            let _ = writeln!(out, "\n{NO_PROJECTIONS_NOTICE}");
        }
    }

    out.push_str("\nDone.\n");
    out
}
