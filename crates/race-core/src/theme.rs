// File: crates/race-core/src/theme.rs
// Summary: Chart colors, including the fixed per-game palette.

/// Colors used by the renderer plus the name-to-color mapping for the games.
///
/// The game palette ships with the chart styling, but the renderer draws
/// every team line in the single `line_stroke` color; the mapping stays
/// addressable through [`Theme::game_color`].
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub grid: &'static str,
    pub line_stroke: &'static str,
    pub text_fill: &'static str,
    pub game_palette: Vec<(&'static str, &'static str)>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            grid: "#eee",
            line_stroke: "#333",
            text_fill: "#000",
            game_palette: vec![
                ("Game 1", "#ff7d00"),
                ("Game 2", "#ffb366"),
                ("Game 3", "#f0d1b1"),
                ("Game 4", "#a4243b"),
                ("Game 5", "#F07167"),
                ("Game 6", "#15616d"),
                ("Game 7", "#3998aa"),
                ("Game 8", "#8bbbc4"),
            ],
        }
    }

    /// Palette color for a game label, when one is defined.
    pub fn game_color(&self, label: &str) -> Option<&'static str> {
        self.game_palette
            .iter()
            .find(|(l, _)| *l == label)
            .map(|&(_, c)| c)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
