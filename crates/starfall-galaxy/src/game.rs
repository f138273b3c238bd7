//! Galaxy session state machine.
//!
//! Every player action is one atomic `apply`; the phase decides which
//! actions are live, and anything else is a silent no-op. Views are
//! rebuilt on demand and drain the pending notice messages.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{self, EnemyShip};
use crate::events::{self, EventKind};
use crate::sector::{self, ResourceKind, StarSystem};
use crate::ship::{CargoItem, Ship};
use crate::station::{self, StockItem};

/// Sector the run starts in.
const START_SECTOR: (i32, i32) = (5, 5);
/// Arriving closer than this to (0, 0) wins the run.
const CORE_RADIUS: f64 = 1.0;
/// Chance a jump triggers an encounter.
const ENCOUNTER_CHANCE: f64 = 0.3;
/// Of encounters: share that is combat rather than a scripted event.
const COMBAT_SHARE: f64 = 0.6;
/// Energy cost of a sensor sweep.
const SCAN_ENERGY: u32 = 10;
/// Energy cost of running the collectors.
const COLLECT_ENERGY: u32 = 20;
/// Chance a kill leaves salvageable energy.
const SALVAGE_CHANCE: f64 = 0.7;

/// Galaxy session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalaxyPhase {
    #[default]
    Start,
    /// Free flight: jumping, scanning, collecting, docking.
    Play,
    Station,
    Combat,
    Event,
    GameOver,
}

/// All possible player actions, one per menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GalaxyAction {
    StartGame,
    /// Jump one sector along one axis.
    Jump { dx: i32, dy: i32 },
    Scan,
    Collect,
    RechargeShields,
    SellCargo { index: usize },
    Dock,
    Undock,
    Repair,
    Refuel,
    Buy { index: usize },
    Attack { weapon: usize },
    Flee,
    Choose { option: usize },
    NewGame,
}

/// Configuration for a galaxy session.
#[derive(Debug, Clone)]
pub struct GalaxyConfig {
    /// Seed for the session RNG (encounters, combat, station stock).
    /// Sector generation is seeded by coordinates and unaffected.
    pub seed: u64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A running galaxy session.
pub struct GalaxyGame {
    rng: ChaCha8Rng,
    pub(crate) phase: GalaxyPhase,
    pub(crate) ship: Ship,
    pub(crate) sector: (i32, i32),
    pub(crate) system: StarSystem,
    pub(crate) explored: HashMap<(i32, i32), StarSystem>,
    pub(crate) enemy: Option<EnemyShip>,
    pub(crate) event: Option<EventKind>,
    pub(crate) stock: Vec<StockItem>,
    won: bool,
    log: Vec<String>,
    notices: Vec<String>,
}

impl GalaxyGame {
    pub fn new(config: GalaxyConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: GalaxyPhase::Start,
            ship: Ship::default(),
            sector: START_SECTOR,
            system: sector::generate(START_SECTOR.0, START_SECTOR.1),
            explored: HashMap::new(),
            enemy: None,
            event: None,
            stock: Vec::new(),
            won: false,
            log: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn phase(&self) -> GalaxyPhase {
        self.phase
    }

    /// Apply one player action. Actions that do not fit the current
    /// phase are dropped silently.
    pub fn apply(&mut self, action: GalaxyAction) {
        match (self.phase, action) {
            (GalaxyPhase::Start, GalaxyAction::StartGame) => self.start_run(),
            (GalaxyPhase::Play, GalaxyAction::Jump { dx, dy }) => self.jump(dx, dy),
            (GalaxyPhase::Play, GalaxyAction::Scan) => self.scan(),
            (GalaxyPhase::Play, GalaxyAction::Collect) => self.collect(),
            (GalaxyPhase::Play, GalaxyAction::RechargeShields) => self.recharge_shields(),
            (GalaxyPhase::Play, GalaxyAction::SellCargo { index }) => self.sell_cargo(index),
            (GalaxyPhase::Play, GalaxyAction::Dock) => self.dock(),
            (GalaxyPhase::Station, GalaxyAction::Undock) => self.undock(),
            (GalaxyPhase::Station, GalaxyAction::Repair) => self.repair(),
            (GalaxyPhase::Station, GalaxyAction::Refuel) => self.refuel(),
            (GalaxyPhase::Station, GalaxyAction::Buy { index }) => self.buy(index),
            (GalaxyPhase::Combat, GalaxyAction::Attack { weapon }) => self.attack(weapon),
            (GalaxyPhase::Combat, GalaxyAction::Flee) => self.flee(),
            (GalaxyPhase::Event, GalaxyAction::Choose { option }) => self.choose(option),
            (GalaxyPhase::GameOver, GalaxyAction::NewGame) => self.reset(),
            _ => {}
        }
    }

    fn start_run(&mut self) {
        self.explored.insert(self.sector, self.system.clone());
        self.phase = GalaxyPhase::Play;
        self.log
            .push("Launched from the rim. Destination: the Galactic Core.".to_string());
        log::info!("galaxy run started in sector {:?}", self.sector);
    }

    /// Jump to an adjacent sector. Costs one fuel; arrival order is
    /// win check, then adrift check, then the encounter roll.
    fn jump(&mut self, dx: i32, dy: i32) {
        if dx.abs() + dy.abs() != 1 {
            return;
        }
        if self.ship.fuel < 1 {
            self.notices.push("Not enough fuel!".to_string());
            return;
        }
        self.ship.fuel -= 1;
        self.sector = (self.sector.0 + dx, self.sector.1 + dy);

        let (x, y) = self.sector;
        self.system = self
            .explored
            .entry(self.sector)
            .or_insert_with(|| sector::generate(x, y))
            .clone();

        self.log
            .push(format!("Jumped to {} at sector {},{}.", self.system.name, x, y));

        if sector::distance_to_core(self.sector) < CORE_RADIUS {
            self.won = true;
            self.phase = GalaxyPhase::GameOver;
            self.notices
                .push("You have reached the Galactic Core. Victory!".to_string());
            log::info!("galaxy run won at sector {:?}", self.sector);
            return;
        }

        if self.ship.fuel == 0 {
            self.phase = GalaxyPhase::GameOver;
            self.notices
                .push("The tank runs dry. Your ship drifts endlessly through the void.".to_string());
            log::info!("galaxy run lost: out of fuel at sector {:?}", self.sector);
            return;
        }

        if self.rng.gen_bool(ENCOUNTER_CHANCE) {
            if self.rng.gen_bool(COMBAT_SHARE) {
                self.start_combat();
            } else {
                self.start_event();
            }
        }
    }

    fn scan(&mut self) {
        if !self.ship.spend_energy(SCAN_ENERGY) {
            self.notices.push("Not enough energy to scan!".to_string());
            return;
        }
        match &self.system.deposit {
            Some(deposit) => self.notices.push(format!(
                "Scan complete: {} units of {} detected.",
                deposit.amount,
                deposit.kind.label()
            )),
            None => self
                .notices
                .push("Scan complete: no significant resources.".to_string()),
        }
    }

    /// Run the collectors on the local deposit. Fuel goes straight
    /// into the tank (clamped); everything else becomes cargo. The
    /// emptied deposit is recorded in the explored map so revisits
    /// cannot farm it.
    fn collect(&mut self) {
        let Some(deposit) = self.system.deposit else {
            self.notices.push("No resources to collect here.".to_string());
            return;
        };
        if !self.ship.spend_energy(COLLECT_ENERGY) {
            self.notices.push("Not enough energy to collect!".to_string());
            return;
        }

        if deposit.kind == ResourceKind::Fuel {
            let gained = self.ship.add_fuel(deposit.amount);
            self.notices.push(format!("Collected {gained} units of fuel."));
        } else {
            self.ship.cargo.push(CargoItem {
                name: deposit.kind.label().to_string(),
                sell_price: deposit.kind.sell_value(),
            });
            self.notices
                .push(format!("Added {} to the cargo bay.", deposit.kind.label()));
        }

        self.system.deposit = None;
        self.explored.insert(self.sector, self.system.clone());
    }

    /// Convert energy into shields one for one, up to the shield cap.
    fn recharge_shields(&mut self) {
        let needed = self.ship.max_shields - self.ship.shields;
        let used = needed.min(self.ship.energy);
        self.ship.shields += used;
        self.ship.energy -= used;
        self.notices
            .push(format!("Recharged shields using {used} energy."));
    }

    fn sell_cargo(&mut self, index: usize) {
        if index >= self.ship.cargo.len() {
            return;
        }
        let item = self.ship.cargo.remove(index);
        self.ship.credits += item.sell_price;
        self.notices
            .push(format!("Sold {} for {} credits.", item.name, item.sell_price));
    }

    fn dock(&mut self) {
        let Some(station) = self.system.station_name.clone() else {
            self.notices
                .push("There is no station in this system.".to_string());
            return;
        };
        self.stock = station::draw_stock(&mut self.rng);
        self.phase = GalaxyPhase::Station;
        self.notices.push(format!("Docked at {station}."));
    }

    fn undock(&mut self) {
        self.phase = GalaxyPhase::Play;
        self.notices.push("Departed the station.".to_string());
    }

    fn repair(&mut self) {
        let cost = station::REPAIR_POINTS * station::REPAIR_COST_PER_POINT;
        if !self.ship.spend_credits(cost) {
            self.notices.push("Not enough credits!".to_string());
            return;
        }
        self.ship.repair_hull(station::REPAIR_POINTS);
        self.notices.push(format!(
            "Repaired {} hull for {cost} credits.",
            station::REPAIR_POINTS
        ));
    }

    fn refuel(&mut self) {
        let cost = station::REFUEL_UNITS * station::REFUEL_COST_PER_UNIT;
        if !self.ship.spend_credits(cost) {
            self.notices.push("Not enough credits!".to_string());
            return;
        }
        self.ship.add_fuel(station::REFUEL_UNITS);
        self.notices
            .push(format!("Added {} fuel for {cost} credits.", station::REFUEL_UNITS));
    }

    fn buy(&mut self, index: usize) {
        if index >= self.stock.len() {
            return;
        }
        let item = self.stock[index].clone();
        station::purchase(&mut self.ship, &item, &mut self.notices);
    }

    fn start_combat(&mut self) {
        let enemy = combat::spawn_enemy(self.system.threat, &mut self.rng);
        self.notices
            .push(format!("A {} drops out of warp and opens fire!", enemy.name));
        self.enemy = Some(enemy);
        self.phase = GalaxyPhase::Combat;
    }

    fn start_event(&mut self) {
        self.event = Some(EventKind::roll(&mut self.rng));
        self.phase = GalaxyPhase::Event;
    }

    /// Fire one weapon. The energy gate comes first; a refused shot
    /// does not give the enemy a free turn.
    fn attack(&mut self, weapon_index: usize) {
        let Some(weapon) = self.ship.weapons.get(weapon_index).cloned() else {
            return;
        };
        if !self.ship.spend_energy(weapon.energy_cost) {
            self.notices
                .push(format!("Not enough energy to fire the {}!", weapon.name));
            return;
        }
        let Some(mut enemy) = self.enemy.take() else {
            return;
        };

        if self.rng.gen_bool(weapon.hit_chance) {
            enemy.hull = enemy.hull.saturating_sub(weapon.damage);
            self.notices
                .push(format!("Your {} hits for {} damage!", weapon.name, weapon.damage));
            if enemy.hull == 0 {
                self.win_combat(enemy);
                return;
            }
        } else {
            self.notices.push(format!("Your {} misses!", weapon.name));
        }

        self.enemy_turn(enemy);
    }

    fn flee(&mut self) {
        if self.rng.gen_bool(0.5) {
            self.notices.push("You break away and escape!".to_string());
            self.enemy = None;
            self.phase = GalaxyPhase::Play;
        } else {
            self.notices.push("Escape failed!".to_string());
            if let Some(enemy) = self.enemy.take() {
                self.enemy_turn(enemy);
            }
        }
    }

    fn choose(&mut self, option: usize) {
        let Some(event) = self.event.take() else {
            return;
        };
        if option >= 2 {
            self.event = Some(event);
            return;
        }
        let fatal = events::resolve(event, option, &mut self.ship, &mut self.rng, &mut self.notices);
        if fatal {
            self.phase = GalaxyPhase::GameOver;
            log::info!("galaxy run lost during a {} event", event.title());
        } else {
            self.phase = GalaxyPhase::Play;
        }
    }

    /// The enemy's return shot. On a killing blow the session ends;
    /// otherwise the enemy stays for the next round.
    fn enemy_turn(&mut self, enemy: EnemyShip) {
        let destroyed = combat::enemy_strike(&mut self.ship, &enemy, &mut self.rng, &mut self.notices);
        if destroyed {
            self.phase = GalaxyPhase::GameOver;
            self.notices
                .push(format!("Your ship breaks apart under the {}'s fire.", enemy.name));
            log::info!("galaxy run lost in combat against a {}", enemy.name);
        } else {
            self.enemy = Some(enemy);
        }
    }

    fn win_combat(&mut self, enemy: EnemyShip) {
        self.ship.credits += enemy.bounty;
        self.notices.push(format!(
            "The {} explodes! Bounty: {} credits.",
            enemy.name, enemy.bounty
        ));
        if self.rng.gen_bool(SALVAGE_CHANCE) {
            let salvage = self.rng.gen_range(20..50);
            self.ship.add_energy(salvage);
            self.notices
                .push(format!("Recovered {salvage} energy from the debris."));
        }
        self.log
            .push(format!("Defeated a {} in the {} system.", enemy.name, self.system.name));
        self.phase = GalaxyPhase::Play;
    }

    /// Back to a fresh run. The session RNG keeps its stream; the
    /// galaxy itself regenerates identically from coordinates anyway.
    fn reset(&mut self) {
        self.phase = GalaxyPhase::Start;
        self.ship = Ship::default();
        self.sector = START_SECTOR;
        self.system = sector::generate(START_SECTOR.0, START_SECTOR.1);
        self.explored.clear();
        self.enemy = None;
        self.event = None;
        self.stock.clear();
        self.won = false;
        self.log.clear();
    }

    /// Build the UI view, draining pending notices.
    pub fn view(&mut self) -> GalaxyView {
        GalaxyView {
            phase: self.phase,
            ship: self.ship.clone(),
            system: self.system.clone(),
            sector: self.sector,
            distance_to_core: sector::distance_to_core(self.sector),
            enemy: self.enemy.clone(),
            event: self.event.map(|kind| EventView {
                title: kind.title().to_string(),
                description: kind.description().to_string(),
                options: kind.options().map(str::to_string),
            }),
            stock: self.stock.clone(),
            won: self.won,
            notices: std::mem::take(&mut self.notices),
            log: self.log.clone(),
        }
    }
}

/// Read-only view for the UI, rebuilt after each action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyView {
    pub phase: GalaxyPhase,
    pub ship: Ship,
    pub system: StarSystem,
    pub sector: (i32, i32),
    pub distance_to_core: f64,
    pub enemy: Option<EnemyShip>,
    pub event: Option<EventView>,
    pub stock: Vec<StockItem>,
    pub won: bool,
    /// Messages produced since the last view was taken.
    pub notices: Vec<String>,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventView {
    pub title: String,
    pub description: String,
    pub options: [String; 2],
}
