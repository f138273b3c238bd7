//! The player's ship: pools, weapons, and cargo.

use serde::{Deserialize, Serialize};

/// A mounted weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    pub energy_cost: u32,
    /// Chance to hit per shot, `0.0..=1.0`.
    pub hit_chance: f64,
}

impl Weapon {
    /// The starting armament.
    pub fn laser_cannon() -> Self {
        Self {
            name: "Laser Cannon".to_string(),
            damage: 15,
            energy_cost: 10,
            hit_chance: 0.8,
        }
    }
}

/// One item in the cargo bay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub name: String,
    pub sell_price: u32,
}

/// The player's vessel. All pools stay within `[0, max]`; maxima only
/// grow through station upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub hull: u32,
    pub max_hull: u32,
    pub shields: u32,
    pub max_shields: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub fuel: u32,
    pub max_fuel: u32,
    pub credits: u32,
    pub weapons: Vec<Weapon>,
    pub cargo: Vec<CargoItem>,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            hull: 100,
            max_hull: 100,
            shields: 50,
            max_shields: 50,
            energy: 100,
            max_energy: 100,
            fuel: 25,
            max_fuel: 25,
            credits: 500,
            weapons: vec![Weapon::laser_cannon()],
            cargo: Vec::new(),
        }
    }
}

impl Ship {
    /// Apply hull damage, flooring at zero. Returns true if the hull
    /// is gone.
    pub fn damage_hull(&mut self, amount: u32) -> bool {
        self.hull = self.hull.saturating_sub(amount);
        self.hull == 0
    }

    pub fn repair_hull(&mut self, amount: u32) {
        self.hull = (self.hull + amount).min(self.max_hull);
    }

    /// Add fuel up to tank capacity. Returns how much actually fit.
    pub fn add_fuel(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_fuel - self.fuel);
        self.fuel += gained;
        gained
    }

    pub fn add_energy(&mut self, amount: u32) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    /// Deduct energy if available. False means the action is refused.
    pub fn spend_energy(&mut self, amount: u32) -> bool {
        if self.energy < amount {
            return false;
        }
        self.energy -= amount;
        true
    }

    /// Deduct credits if available. False means the purchase is
    /// refused.
    pub fn spend_credits(&mut self, amount: u32) -> bool {
        if self.credits < amount {
            return false;
        }
        self.credits -= amount;
        true
    }

    pub fn has_weapon(&self, name: &str) -> bool {
        self.weapons.iter().any(|w| w.name == name)
    }
}
