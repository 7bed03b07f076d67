// File: crates/race-core/src/chart.rs
// Summary: Chart struct and the SVG rendering pipeline (title, grid, labels, team lines).

use std::path::Path;

use crate::error::ChartError;
use crate::grid::tick_values;
use crate::scale::{GameScale, ScoreScale};
use crate::svg::SvgDocument;
use crate::table::CumulativeTable;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, TICK_STEP, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub tick_step: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            tick_step: TICK_STEP,
            theme: Theme::default(),
        }
    }
}

pub struct Chart {
    pub title: String,
    pub table: CumulativeTable,
}

impl Chart {
    pub fn new(title: impl Into<String>, table: CumulativeTable) -> Self {
        Self { title: title.into(), table }
    }

    /// Serialize the chart to SVG markup without touching the filesystem.
    ///
    /// Emission order matters: title, gridlines and tick labels, game
    /// labels, then one polyline and name label per team in table row order.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String, ChartError> {
        let max_score = match self.table.max_value() {
            Some(m) if m > 0.0 => m,
            other => return Err(ChartError::DegenerateScale(other.unwrap_or(0.0))),
        };

        let chart_w = (opts.width - opts.insets.hsum() as i32) as f64;
        let chart_h = (opts.height - opts.insets.vsum() as i32) as f64;
        let xscale = GameScale::new(opts.insets.left as f64, chart_w, self.table.game_count());
        let yscale = ScoreScale::new(opts.insets.top as f64, chart_h, max_score);

        let mut doc = SvgDocument::new(opts.width, opts.height);
        draw_title(&mut doc, opts, &self.title);
        draw_grid(&mut doc, opts, &yscale, max_score);
        draw_game_labels(&mut doc, opts, &xscale, &self.table.game_labels);
        draw_team_lines(&mut doc, opts, &xscale, &yscale, &self.table);
        Ok(doc.build())
    }

    /// Render the chart and write the SVG document to `output_svg_path`.
    /// The file is written exactly once, after every primitive exists.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let markup = self.render_to_svg_string(opts)?;
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, markup)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_title(doc: &mut SvgDocument, opts: &RenderOptions, title: &str) {
    doc.text(
        opts.width as f64 / 2.0,
        30.0,
        title,
        24.0,
        "bold",
        "middle",
        opts.theme.text_fill,
    );
}

fn draw_grid(doc: &mut SvgDocument, opts: &RenderOptions, yscale: &ScoreScale, max_score: f64) {
    let left = opts.insets.left as f64;
    let right = (opts.width - opts.insets.right as i32) as f64;
    for tick in tick_values(max_score, opts.tick_step) {
        let y = yscale.to_px(tick);
        doc.line(left, y, right, y, opts.theme.grid, 1.0);
        // label nudged down so it sits visually centered on the line
        doc.text(
            left - 30.0,
            y + 5.0,
            &format!("{tick}"),
            12.0,
            "normal",
            "start",
            opts.theme.text_fill,
        );
    }
}

fn draw_game_labels(
    doc: &mut SvgDocument,
    opts: &RenderOptions,
    xscale: &GameScale,
    labels: &[String],
) {
    let y = (opts.height - 20) as f64;
    for (i, label) in labels.iter().enumerate() {
        doc.text(
            xscale.to_px(i + 1),
            y,
            label,
            12.0,
            "normal",
            "middle",
            opts.theme.text_fill,
        );
    }
}

fn draw_team_lines(
    doc: &mut SvgDocument,
    opts: &RenderOptions,
    xscale: &GameScale,
    yscale: &ScoreScale,
    table: &CumulativeTable,
) {
    for row in &table.rows {
        let points: Vec<(f64, f64)> = row
            .scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (xscale.to_px(i + 1), yscale.to_px(score)))
            .collect();
        if points.is_empty() {
            continue;
        }
        doc.polyline(&points, opts.theme.line_stroke, 2.0);

        let (last_x, last_y) = points[points.len() - 1];
        doc.text(
            last_x + 10.0,
            last_y,
            &row.team,
            12.0,
            "normal",
            "start",
            opts.theme.text_fill,
        );
    }
}
