//! Combatant profiles.
//!
//! A profile carries everything the engine needs to know about one side of
//! an exchange: its attack dice and the defensive stats that apply when it
//! takes damage.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::{PIP_HI, PIP_LO};
use crate::error::{MechError, MechResult};

/// One side of a combat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Dice rolled per attack.
    pub num_dice: u32,
    /// Minimum face that counts as a success (1-8).
    pub dice_stat: u32,
    /// How many failed dice may be rerolled once.
    pub num_rerolls: u32,
    /// Flat damage reduction when receiving damage.
    pub armor: u32,
    /// Armor piercing applied against the opponent's armor.
    pub ap: u32,
    /// Shield dice rolled when receiving nonzero damage.
    pub num_shield_dice: u32,
    /// Damage added after armor when dealing damage.
    pub toxic_dmg: u32,
}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            num_dice: 1,
            dice_stat: 5,
            num_rerolls: 0,
            armor: 0,
            ap: 0,
            num_shield_dice: 0,
            toxic_dmg: 0,
        }
    }
}

impl Combatant {
    /// A combatant rolling `num_dice` dice against `dice_stat`, with no other
    /// modifiers.
    pub fn new(num_dice: u32, dice_stat: u32) -> Self {
        Self {
            num_dice,
            dice_stat,
            ..Self::default()
        }
    }

    /// Set the reroll allowance.
    pub fn with_rerolls(mut self, rerolls: u32) -> Self {
        self.num_rerolls = rerolls;
        self
    }

    /// Set the armor value.
    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    /// Set the armor piercing value.
    pub fn with_ap(mut self, ap: u32) -> Self {
        self.ap = ap;
        self
    }

    /// Set the number of shield dice.
    pub fn with_shields(mut self, shields: u32) -> Self {
        self.num_shield_dice = shields;
        self
    }

    /// Set the toxic damage value.
    pub fn with_toxic(mut self, toxic: u32) -> Self {
        self.toxic_dmg = toxic;
        self
    }

    /// Check that the profile is usable by the engine.
    pub fn validate(&self) -> MechResult<()> {
        if !(PIP_LO..=PIP_HI).contains(&self.dice_stat) {
            return Err(MechError::InvalidCombatant(format!(
                "dice stat {} outside {PIP_LO}..={PIP_HI}",
                self.dice_stat
            )));
        }
        Ok(())
    }

    /// Net armor this combatant presents against an attacker with `ap`.
    pub fn net_armor_against(&self, ap: u32) -> u32 {
        self.armor.saturating_sub(ap)
    }
}

/// Parses `key=value` pairs separated by commas, e.g.
/// `dice=4,stat=5,rerolls=1,armor=1,ap=0,shields=2,toxic=0`.
///
/// Omitted keys keep their [`Combatant::default`] value. The result is
/// validated before it is returned.
impl FromStr for Combatant {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        let mut combatant = Self::default();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, raw)) = part.split_once('=') else {
                return Err(MechError::InvalidCombatant(format!(
                    "expected key=value, got '{part}'"
                )));
            };
            let key = key.trim();
            let raw = raw.trim();
            let value = raw.parse::<u32>().map_err(|_| {
                MechError::InvalidCombatant(format!("invalid value for {key}: '{raw}'"))
            })?;

            let field = match key.to_lowercase().as_str() {
                "dice" => &mut combatant.num_dice,
                "stat" => &mut combatant.dice_stat,
                "rerolls" => &mut combatant.num_rerolls,
                "armor" | "armour" => &mut combatant.armor,
                "ap" => &mut combatant.ap,
                "shields" => &mut combatant.num_shield_dice,
                "toxic" => &mut combatant.toxic_dmg,
                other => {
                    return Err(MechError::InvalidCombatant(format!("unknown key '{other}'")));
                }
            };
            *field = value;
        }

        combatant.validate()?;
        Ok(combatant)
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dice={},stat={},rerolls={},armor={},ap={},shields={},toxic={}",
            self.num_dice,
            self.dice_stat,
            self.num_rerolls,
            self.armor,
            self.ap,
            self.num_shield_dice,
            self.toxic_dmg
        )
    }
}
