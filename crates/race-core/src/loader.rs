// File: crates/race-core/src/loader.rs
// Summary: CSV loader mapping a headered standings file onto a ScoreTable.

use std::path::Path;

use crate::error::ChartError;
use crate::table::{ScoreTable, TeamRow};

/// Header label of the team identifier column.
pub const TEAM_COLUMN: &str = "Team";

/// Load a standings CSV with a `Team` column plus one numeric column per
/// entry in `game_labels`. Rows keep their file order. Score cells are read
/// in `game_labels` order regardless of the column order in the file.
pub fn load_scores(
    path: impl AsRef<Path>,
    game_labels: &[String],
) -> Result<ScoreTable, ChartError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    let headers = rdr.headers()?.clone();
    let idx = |label: &str| headers.iter().position(|h| h.trim() == label);

    let team_idx = idx(TEAM_COLUMN)
        .ok_or_else(|| ChartError::MissingColumn(TEAM_COLUMN.to_string()))?;
    let mut game_idx = Vec::with_capacity(game_labels.len());
    for label in game_labels {
        game_idx.push(idx(label).ok_or_else(|| ChartError::MissingColumn(label.clone()))?);
    }

    let mut table = ScoreTable::new(game_labels.to_vec());
    for (row_no, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let team = rec.get(team_idx).unwrap_or("").trim().to_string();
        let mut scores = Vec::with_capacity(game_idx.len());
        for (&ix, label) in game_idx.iter().zip(game_labels) {
            let raw = rec.get(ix).unwrap_or("").trim();
            let value = raw.parse::<f64>().map_err(|_| ChartError::BadScore {
                row: row_no + 1,
                team: team.clone(),
                column: label.clone(),
                value: raw.to_string(),
            })?;
            scores.push(value);
        }
        table.add_row(TeamRow { team, scores });
    }
    Ok(table)
}
