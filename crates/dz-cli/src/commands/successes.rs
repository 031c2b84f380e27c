use colored::Colorize;

use dz_mechanics::{CombatOptions, make_success_probs};

pub fn run(profile: &str, simulations: u32, seed: Option<u64>, json: bool) -> Result<(), String> {
    let combatant = super::parse_profile("combatant", profile)?;
    let mut options = CombatOptions::default().with_simulations(simulations);
    if let Some(seed) = seed {
        options = options.with_seed(seed);
    }
    let probs = make_success_probs(&combatant, options.num_simulations, &mut options.rng())
        .map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&serde_json::json!({
            "combatant": combatant,
            "simulations": simulations,
            "distribution": probs,
            "mean": probs.mean(),
        }));
    }

    println!(
        "  {} {}",
        "Successes".bold(),
        format!("({simulations} simulations, {})", super::seed_label(seed)).dimmed()
    );
    println!("  Profile: {combatant}");
    println!();

    let table = super::distribution_table("Successes", &probs, |_, label| label.normal());
    println!("{table}");
    println!();
    println!("  Expected successes: {:.3}", probs.mean());

    Ok(())
}
