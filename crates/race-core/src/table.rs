// File: crates/race-core/src/table.rs
// Summary: Score table model and the cumulative (running total) transform.

/// Canonical game labels "Game 1" .. "Game n", in chart order.
pub fn game_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Game {i}")).collect()
}

/// One standings row: a team and its per-game scores in canonical game order.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamRow {
    pub team: String,
    pub scores: Vec<f64>,
}

/// Raw per-game scores for every team. Rows keep their input order; that
/// order becomes the rendering order.
#[derive(Clone, Debug, Default)]
pub struct ScoreTable {
    pub game_labels: Vec<String>,
    pub rows: Vec<TeamRow>,
}

impl ScoreTable {
    pub fn new(game_labels: Vec<String>) -> Self {
        Self { game_labels, rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: TeamRow) {
        self.rows.push(row);
    }

    pub fn game_count(&self) -> usize {
        self.game_labels.len()
    }

    /// Running total per team over games 1..=i. Walks the games strictly in
    /// canonical label order; the prefix sum is only meaningful over that
    /// sequence.
    pub fn cumulative(&self) -> CumulativeTable {
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut total = 0.0f64;
                let scores = r
                    .scores
                    .iter()
                    .map(|s| {
                        total += s;
                        total
                    })
                    .collect();
                TeamRow { team: r.team.clone(), scores }
            })
            .collect();
        CumulativeTable { game_labels: self.game_labels.clone(), rows }
    }
}

/// Cumulative totals derived from a `ScoreTable`; same shape, never mutated
/// after derivation.
#[derive(Clone, Debug, Default)]
pub struct CumulativeTable {
    pub game_labels: Vec<String>,
    pub rows: Vec<TeamRow>,
}

impl CumulativeTable {
    pub fn game_count(&self) -> usize {
        self.game_labels.len()
    }

    /// Global maximum over every cell, or `None` for a table with no cells.
    /// Used only for axis scaling.
    pub fn max_value(&self) -> Option<f64> {
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for r in &self.rows {
            for &v in &r.scores {
                max = max.max(v);
                any = true;
            }
        }
        if any { Some(max) } else { None }
    }
}
