//! Result reporter — formatted win-rate lines and a two-bar chart.
//!
//! Pure rendering: takes the two percentages from a completed run and
//! produces text. Nothing here feeds back into the simulation.

use crate::simulation::engine::SimulationResult;

/// Bar width corresponding to 100%.
const BAR_WIDTH: usize = 50;

/// The two conventional win-rate lines.
pub fn format_report(result: &SimulationResult) -> String {
    format!(
        "Win rate if you stay with your initial choice: {:.2}%\n\
         Win rate if you switch your choice: {:.2}%",
        result.stay_rate, result.switch_rate
    )
}

/// Render one labeled bar scaled so 100% fills [`BAR_WIDTH`] cells.
fn render_bar(label: &str, rate: f64) -> String {
    let filled = ((rate / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  {:<6} │{}{} {:.2}%",
        label,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        rate
    )
}

/// Two-bar chart with "Stay" and "Switch" categories.
pub fn render_bar_chart(result: &SimulationResult) -> String {
    format!(
        "{}\n{}",
        render_bar("Stay", result.stay_rate),
        render_bar("Switch", result.switch_rate)
    )
}
