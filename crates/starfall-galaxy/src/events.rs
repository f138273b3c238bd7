//! Scripted flight events: two options each, probabilistic outcomes.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ship::{CargoItem, Ship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    DistressSignal,
    AsteroidField,
    NebulaCloud,
}

impl EventKind {
    /// Draw one of the three events with equal weight.
    pub fn roll(rng: &mut ChaCha8Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => EventKind::DistressSignal,
            1 => EventKind::AsteroidField,
            _ => EventKind::NebulaCloud,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EventKind::DistressSignal => "Distress Signal",
            EventKind::AsteroidField => "Asteroid Field",
            EventKind::NebulaCloud => "Nebula Cloud",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EventKind::DistressSignal => {
                "You pick up a distress signal from a nearby freighter. It could be a trap."
            }
            EventKind::AsteroidField => {
                "A dense asteroid field blocks your route. Sensors show mineral signatures inside."
            }
            EventKind::NebulaCloud => {
                "A shimmering nebula lies ahead, crackling with unstable energy."
            }
        }
    }

    pub fn options(&self) -> [&'static str; 2] {
        match self {
            EventKind::DistressSignal => ["Investigate the signal", "Ignore it and move on"],
            EventKind::AsteroidField => ["Navigate carefully", "Blast through"],
            EventKind::NebulaCloud => ["Fly into the nebula", "Go around it"],
        }
    }
}

/// Apply the chosen option to the ship. Returns true if the outcome
/// destroyed the ship or left it adrift.
pub fn resolve(
    event: EventKind,
    option: usize,
    ship: &mut Ship,
    rng: &mut ChaCha8Rng,
    notices: &mut Vec<String>,
) -> bool {
    match (event, option) {
        (EventKind::DistressSignal, 0) => {
            if rng.gen_bool(0.6) {
                ship.credits += 200;
                notices.push("You rescue a stranded merchant who rewards you with 200 credits!".to_string());
                false
            } else {
                notices.push("It's a trap! Pirates ambush you for 15 hull damage!".to_string());
                ship.damage_hull(15)
            }
        }
        (EventKind::DistressSignal, 1) => {
            notices.push("You avoid what sensors later confirm was a pirate lure.".to_string());
            false
        }
        (EventKind::AsteroidField, 0) => {
            if rng.gen_bool(0.7) {
                ship.cargo.push(CargoItem {
                    name: "Rare Minerals".to_string(),
                    sell_price: 150,
                });
                notices.push("You thread the field and pick up rare minerals worth 150 credits!".to_string());
                false
            } else {
                notices.push("A stray rock clips your hull for 10 damage.".to_string());
                ship.damage_hull(10)
            }
        }
        (EventKind::AsteroidField, 1) => {
            if rng.gen_bool(0.4) {
                ship.add_energy(30);
                notices.push("Your weapons clear a path and the debris recharges your collectors!".to_string());
                false
            } else {
                notices.push("Blasting through invites multiple impacts. 25 hull damage!".to_string());
                ship.damage_hull(25)
            }
        }
        (EventKind::NebulaCloud, 0) => {
            if rng.gen_bool(0.5) {
                ship.energy = ship.max_energy;
                ship.shields = ship.max_shields;
                notices.push("The nebula's energy fully recharges your systems!".to_string());
            } else {
                ship.energy = ship.energy.saturating_sub(40);
                ship.shields = ship.shields.saturating_sub(30);
                notices.push("The nebula scrambles your systems, draining energy and shields!".to_string());
            }
            false
        }
        (EventKind::NebulaCloud, 1) => {
            if rng.gen_bool(0.5) {
                ship.credits += 50;
                notices.push("Survey data on the nebula sells for 50 credits.".to_string());
                false
            } else {
                ship.fuel = ship.fuel.saturating_sub(2);
                notices.push("The detour burns 2 extra fuel.".to_string());
                ship.fuel == 0
            }
        }
        _ => false,
    }
}
