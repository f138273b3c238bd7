//! Station services and trade stock.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ship::{CargoItem, Ship, Weapon};

/// Credits per hull point repaired.
pub const REPAIR_COST_PER_POINT: u32 = 5;
/// Hull points restored per repair purchase.
pub const REPAIR_POINTS: u32 = 10;
/// Credits per fuel unit.
pub const REFUEL_COST_PER_UNIT: u32 = 10;
/// Fuel units per refuel purchase.
pub const REFUEL_UNITS: u32 = 5;

/// What buying a stock item does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StockEffect {
    Weapon(Weapon),
    /// Permanent raise to a pool maximum.
    Upgrade(UpgradeStat, u32),
    /// Tradeable cargo with a resale price.
    Cargo(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeStat {
    MaxShields,
    MaxHull,
    MaxEnergy,
}

/// One purchasable line in a station's stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub price: u32,
    pub effect: StockEffect,
}

fn item(name: &str, price: u32, effect: StockEffect) -> StockItem {
    StockItem {
        name: name.to_string(),
        price,
        effect,
    }
}

/// The full catalog stations draw from.
fn catalog() -> Vec<StockItem> {
    vec![
        item(
            "Heavy Laser",
            800,
            StockEffect::Weapon(Weapon {
                name: "Heavy Laser".to_string(),
                damage: 25,
                energy_cost: 15,
                hit_chance: 0.75,
            }),
        ),
        item(
            "Plasma Cannon",
            1500,
            StockEffect::Weapon(Weapon {
                name: "Plasma Cannon".to_string(),
                damage: 40,
                energy_cost: 20,
                hit_chance: 0.7,
            }),
        ),
        item("Shield Booster", 600, StockEffect::Upgrade(UpgradeStat::MaxShields, 25)),
        item("Hull Reinforcement", 750, StockEffect::Upgrade(UpgradeStat::MaxHull, 30)),
        item("Energy Capacitor", 500, StockEffect::Upgrade(UpgradeStat::MaxEnergy, 20)),
        item("Minerals", 50, StockEffect::Cargo(45)),
        item("Tech Components", 100, StockEffect::Cargo(90)),
        item("Exotic Matter", 200, StockEffect::Cargo(180)),
    ]
}

/// Draw 3 to 5 distinct catalog items for a docking.
pub fn draw_stock(rng: &mut ChaCha8Rng) -> Vec<StockItem> {
    let count = rng.gen_range(3..=5);
    let mut items = catalog();
    items.shuffle(rng);
    items.truncate(count);
    items
}

/// Apply a purchase. Refused on insufficient credits or a duplicate
/// weapon; refusals leave the ship untouched.
pub fn purchase(ship: &mut Ship, item: &StockItem, notices: &mut Vec<String>) -> bool {
    if let StockEffect::Weapon(weapon) = &item.effect {
        if ship.has_weapon(&weapon.name) {
            notices.push(format!("You already own a {}.", weapon.name));
            return false;
        }
    }
    if !ship.spend_credits(item.price) {
        notices.push("Not enough credits!".to_string());
        return false;
    }
    match &item.effect {
        StockEffect::Weapon(weapon) => ship.weapons.push(weapon.clone()),
        StockEffect::Upgrade(stat, gain) => match stat {
            UpgradeStat::MaxShields => ship.max_shields += gain,
            UpgradeStat::MaxHull => ship.max_hull += gain,
            UpgradeStat::MaxEnergy => ship.max_energy += gain,
        },
        StockEffect::Cargo(sell_price) => ship.cargo.push(CargoItem {
            name: item.name.clone(),
            sell_price: *sell_price,
        }),
    }
    notices.push(format!("Purchased {}!", item.name));
    true
}
