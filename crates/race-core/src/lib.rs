// File: crates/race-core/src/lib.rs
// Summary: Core library entry point; exports public API for score aggregation and chart rendering.

pub mod chart;
pub mod table;
pub mod loader;
pub mod grid;
pub mod types;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use loader::load_scores;
pub use svg::SvgDocument;
pub use table::{game_labels, CumulativeTable, ScoreTable, TeamRow};
pub use theme::Theme;
