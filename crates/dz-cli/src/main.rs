//! CLI frontend for the Deadzone damage calculator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use dz_mechanics::{DEFAULT_SIMULATIONS, SINGLE_SHIELD_PROB};

#[derive(Parser)]
#[command(
    name = "dz",
    about = "Damage probability calculator for Deadzone-style combat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the damage distribution for an attacker against a defender
    Damage {
        /// Attacker profile, e.g. "dice=3,stat=5,rerolls=1,ap=1,toxic=0"
        #[arg(short, long)]
        attacker: String,

        /// Defender profile, e.g. "dice=2,stat=4,armor=1,shields=2"
        #[arg(short, long)]
        defender: String,

        /// Monte Carlo trials per combatant
        #[arg(short = 'n', long, default_value_t = DEFAULT_SIMULATIONS)]
        simulations: u32,

        /// Number of rounds to sum (1-9)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=9))]
        rounds: u32,

        /// The defender cannot deal damage back to the attacker
        #[arg(long)]
        no_fight_back: bool,

        /// RNG seed for a reproducible result
        #[arg(short, long)]
        seed: Option<u64>,

        /// Chance for one shield die to absorb a point of damage
        #[arg(long, default_value_t = SINGLE_SHIELD_PROB)]
        shield_prob: f64,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the success-count distribution for a single combatant
    Successes {
        /// Combatant profile, e.g. "dice=4,stat=5,rerolls=2"
        #[arg(short, long)]
        profile: String,

        /// Monte Carlo trials
        #[arg(short = 'n', long, default_value_t = DEFAULT_SIMULATIONS)]
        simulations: u32,

        /// RNG seed for a reproducible result
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Damage {
            attacker,
            defender,
            simulations,
            rounds,
            no_fight_back,
            seed,
            shield_prob,
            json,
        } => commands::damage::run(&commands::damage::DamageArgs {
            attacker: &attacker,
            defender: &defender,
            simulations,
            rounds,
            fight_back: !no_fight_back,
            seed,
            shield_prob,
            json,
        }),
        Commands::Successes {
            profile,
            simulations,
            seed,
            json,
        } => commands::successes::run(&profile, simulations, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
