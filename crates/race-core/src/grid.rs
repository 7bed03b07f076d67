// File: crates/race-core/src/grid.rs
// Summary: Gridline tick layout helpers.

/// Tick values 0, step, 2*step, ... up to and including floor(max).
pub fn tick_values(max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !max.is_finite() {
        return Vec::new();
    }
    let top = max.floor();
    let mut out = Vec::new();
    let mut k = 0u32;
    loop {
        let v = step * k as f64;
        if v > top {
            break;
        }
        out.push(v);
        k += 1;
    }
    out
}
