//! Turn-based ship combat.
//!
//! The enemy roster tiers up with the local threat level; every player
//! action that does not end the fight hands the enemy one return shot.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ship::Ship;

/// Flat chance any enemy shot connects.
const ENEMY_HIT_CHANCE: f64 = 0.7;

/// Chance to move one tier down or up after the threat pick.
const TIER_JITTER_CHANCE: f64 = 0.3;

/// Base stats per tier before threat scaling: name, hull, damage,
/// bounty.
const ROSTER: [(&str, u32, u32, u32); 5] = [
    ("Pirate Scout", 50, 8, 100),
    ("Pirate Fighter", 80, 12, 150),
    ("Pirate Cruiser", 120, 18, 250),
    ("Alien Scout", 70, 15, 200),
    ("Alien Warship", 150, 25, 350),
];

/// A hostile ship in the current encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyShip {
    pub name: String,
    pub hull: u32,
    pub max_hull: u32,
    pub damage: u32,
    pub bounty: u32,
}

/// Pick and scale an enemy for a system's threat level. Higher threat
/// selects a higher base tier and multiplies all stats.
pub fn spawn_enemy(threat: f64, rng: &mut ChaCha8Rng) -> EnemyShip {
    let mut tier = 0usize;
    if threat > 0.3 {
        tier = 1;
    }
    if threat > 0.5 {
        tier = 2;
    }
    if threat > 0.7 {
        tier = 3;
    }
    if threat > 0.9 {
        tier = 4;
    }

    // Jitter one tier either way so encounters stay varied.
    if rng.gen_bool(TIER_JITTER_CHANCE) && tier > 0 {
        tier -= 1;
    }
    if rng.gen_bool(TIER_JITTER_CHANCE) && tier < ROSTER.len() - 1 {
        tier += 1;
    }

    let (name, hull, damage, bounty) = ROSTER[tier];
    let scale = 0.8 + threat * 0.5;
    let hull = (f64::from(hull) * scale).round() as u32;
    EnemyShip {
        name: name.to_string(),
        hull,
        max_hull: hull,
        damage: (f64::from(damage) * scale).round() as u32,
        bounty: (f64::from(bounty) * scale).round() as u32,
    }
}

/// One enemy return shot. Shields soak half the damage, capped by what
/// is left; the rest hits the hull. Returns true if the hull is gone.
pub fn enemy_strike(
    ship: &mut Ship,
    enemy: &EnemyShip,
    rng: &mut ChaCha8Rng,
    notices: &mut Vec<String>,
) -> bool {
    if !rng.gen_bool(ENEMY_HIT_CHANCE) {
        notices.push(format!("The {} misses!", enemy.name));
        return false;
    }

    let absorbed = (enemy.damage / 2).min(ship.shields);
    ship.shields -= absorbed;
    let through = enemy.damage - absorbed;
    if absorbed > 0 {
        notices.push(format!("Shields absorb {absorbed} damage."));
    }
    notices.push(format!("The {} hits you for {through} hull damage!", enemy.name));
    ship.damage_hull(through)
}
