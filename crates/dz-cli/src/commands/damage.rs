use colored::Colorize;

use dz_mechanics::{CombatOptions, calc_dmg_probs};

/// Arguments for the `damage` command.
pub struct DamageArgs<'a> {
    pub attacker: &'a str,
    pub defender: &'a str,
    pub simulations: u32,
    pub rounds: u32,
    pub fight_back: bool,
    pub seed: Option<u64>,
    pub shield_prob: f64,
    pub json: bool,
}

pub fn run(args: &DamageArgs<'_>) -> Result<(), String> {
    let attacker = super::parse_profile("attacker", args.attacker)?;
    let defender = super::parse_profile("defender", args.defender)?;

    let mut options = CombatOptions::default()
        .with_simulations(args.simulations)
        .with_rounds(args.rounds)
        .with_fight_back(args.fight_back)
        .with_shield_prob(args.shield_prob);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let dmg_probs = calc_dmg_probs(&attacker, &defender, &options).map_err(|e| e.to_string())?;
    tracing::info!(outcomes = dmg_probs.len(), "damage distribution ready");

    if args.json {
        return super::print_json(&serde_json::json!({
            "attacker": attacker,
            "defender": defender,
            "options": options,
            "distribution": dmg_probs,
            "mean": dmg_probs.mean(),
        }));
    }

    println!(
        "  {} {}",
        "Damage".bold(),
        format!(
            "({} simulations, {} round{}, fight back {}, {})",
            args.simulations,
            args.rounds,
            if args.rounds == 1 { "" } else { "s" },
            if args.fight_back { "on" } else { "off" },
            super::seed_label(args.seed),
        )
        .dimmed()
    );
    println!("  Attacker: {attacker}");
    println!("  Defender: {defender}");
    println!();

    let table = super::distribution_table("Damage", &dmg_probs, |dmg, label| {
        if dmg > 0 {
            label.green()
        } else if dmg < 0 {
            label.red()
        } else {
            label.normal()
        }
    });
    println!("{table}");
    println!();

    let dealt = dmg_probs.prob_at_least(1);
    let taken = 1.0 - dmg_probs.prob_at_least(0);
    println!("  Expected damage: {:+.3}", dmg_probs.mean());
    println!("  Attacker deals damage: {:.2}%", dealt * 100.0);
    if args.fight_back {
        println!("  Attacker takes damage: {:.2}%", taken.max(0.0) * 100.0);
    }

    Ok(())
}
