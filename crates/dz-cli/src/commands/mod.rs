pub mod damage;
pub mod successes;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dz_mechanics::{Combatant, ProbMap};

/// Width of the probability bar in table output.
const BAR_WIDTH: usize = 20;

/// Parse a combatant profile, naming the side in the error.
fn parse_profile(label: &str, raw: &str) -> Result<Combatant, String> {
    raw.parse::<Combatant>()
        .map_err(|e| format!("{label} profile '{raw}': {e}"))
}

/// Render a distribution as a table of outcome, P(=), P(>=), and a bar.
///
/// `colorize` picks the color for each outcome label.
fn distribution_table(
    heading: &str,
    probs: &ProbMap,
    colorize: impl Fn(i64, String) -> colored::ColoredString,
) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![heading, "P(=)", "P(>=)", ""]);

    for (outcome, at_least) in probs.cumulative_at_least() {
        let p = probs.get(outcome);
        table.add_row(vec![
            colorize(outcome, outcome.to_string()).to_string(),
            format_percent(p),
            format_percent(at_least),
            format_bar(p),
        ]);
    }
    table
}

fn format_percent(p: f64) -> String {
    format!("{:>6.2}%", p * 100.0)
}

fn format_bar(p: f64) -> String {
    let filled = (p * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

fn print_json(value: &serde_json::Value) -> Result<(), String> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{payload}");
    Ok(())
}

/// Summary line for the RNG seed, if one was given.
fn seed_label(seed: Option<u64>) -> String {
    seed.map(|s| format!("seed={s}"))
        .unwrap_or_else(|| "unseeded".to_string())
        .dimmed()
        .to_string()
}
