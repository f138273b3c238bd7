//! Seeded star-system generation.
//!
//! Each sector coordinate derives its own tiny linear-congruential
//! stream, so a system looks identical no matter when or in what order
//! it is first visited. The ambient session RNG is never consulted
//! here.

use serde::{Deserialize, Serialize};

/// Classic 9301 / 49297 / 233280 LCG parameters.
const LCG_MULTIPLIER: u64 = 9_301;
const LCG_INCREMENT: u64 = 49_297;
const LCG_MODULUS: u64 = 233_280;

const NAME_PREFIXES: [&str; 8] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
];
const NAME_SUFFIXES: [&str; 6] = [
    "Centauri", "Proxima", "Cygni", "Eridani", "Orionis", "Draconis",
];

/// Star classification. Cosmetic, plus flavor for scan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarClass {
    YellowStar,
    RedDwarf,
    BlueGiant,
    WhiteDwarf,
    NeutronStar,
}

impl StarClass {
    pub fn label(&self) -> &'static str {
        match self {
            StarClass::YellowStar => "Yellow Star",
            StarClass::RedDwarf => "Red Dwarf",
            StarClass::BlueGiant => "Blue Giant",
            StarClass::WhiteDwarf => "White Dwarf",
            StarClass::NeutronStar => "Neutron Star",
        }
    }
}

/// Spawn weights, most common first. Rolled cumulatively.
const STAR_TABLE: [(StarClass, f64); 5] = [
    (StarClass::YellowStar, 0.40),
    (StarClass::RedDwarf, 0.30),
    (StarClass::BlueGiant, 0.15),
    (StarClass::WhiteDwarf, 0.10),
    (StarClass::NeutronStar, 0.05),
];

/// What a resource deposit yields when collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Fuel,
    Minerals,
    TechComponents,
    ExoticMatter,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Fuel => "Fuel",
            ResourceKind::Minerals => "Minerals",
            ResourceKind::TechComponents => "Tech Components",
            ResourceKind::ExoticMatter => "Exotic Matter",
        }
    }

    /// Credit value when sold from cargo. Fuel is never carried as
    /// cargo; it goes straight into the tank on collection.
    pub fn sell_value(&self) -> u32 {
        match self {
            ResourceKind::Fuel => 0,
            ResourceKind::Minerals => 45,
            ResourceKind::TechComponents => 90,
            ResourceKind::ExoticMatter => 180,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub kind: ResourceKind,
    pub amount: u32,
}

/// One generated star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    pub sector: (i32, i32),
    pub star: StarClass,
    pub planets: u32,
    pub station_name: Option<String>,
    /// Rises toward the galactic core, with per-system jitter.
    pub threat: f64,
    pub deposit: Option<Deposit>,
}

/// The per-sector generator stream.
pub(crate) struct SectorRng {
    seed: u64,
}

impl SectorRng {
    /// Seed from the coordinate. `rem_euclid` keeps negative sectors
    /// in range.
    pub(crate) fn new(x: i32, y: i32) -> Self {
        let mixed = i64::from(x) * 1000 + i64::from(y);
        Self {
            seed: mixed.rem_euclid(LCG_MODULUS as i64) as u64,
        }
    }

    /// Next value in `[0, 1)`.
    pub(crate) fn next(&mut self) -> f64 {
        self.seed = (self.seed * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.seed as f64 / LCG_MODULUS as f64
    }
}

/// Straight-line distance from a sector to the galactic core at (0, 0).
pub fn distance_to_core(sector: (i32, i32)) -> f64 {
    f64::from(sector.0).hypot(f64::from(sector.1))
}

/// Generate the system for a sector. Pure: the result depends only on
/// the coordinate, and the draw order below is part of the format.
pub fn generate(x: i32, y: i32) -> StarSystem {
    let mut rng = SectorRng::new(x, y);

    let roll = rng.next();
    let mut cumulative = 0.0;
    let mut star = StarClass::YellowStar;
    for (class, weight) in STAR_TABLE {
        cumulative += weight;
        if roll <= cumulative {
            star = class;
            break;
        }
    }

    let name = format!(
        "{} {} {}",
        NAME_PREFIXES[(rng.next() * NAME_PREFIXES.len() as f64) as usize],
        (rng.next() * 999.0) as u32,
        NAME_SUFFIXES[(rng.next() * NAME_SUFFIXES.len() as f64) as usize],
    );

    let planets = (rng.next() * 5.0) as u32;
    let has_station = rng.next() < 0.4;
    let threat = (1.0 - distance_to_core((x, y)) / 10.0).max(0.0) + rng.next() * 0.3;

    let deposit = if rng.next() < 0.7 {
        const KINDS: [ResourceKind; 4] = [
            ResourceKind::Fuel,
            ResourceKind::Minerals,
            ResourceKind::TechComponents,
            ResourceKind::ExoticMatter,
        ];
        let kind = KINDS[(rng.next() * KINDS.len() as f64) as usize];
        let amount = (rng.next() * 30.0) as u32 + 10;
        Some(Deposit { kind, amount })
    } else {
        None
    };

    let station_name = has_station.then(|| format!("{name} Station"));

    StarSystem {
        name,
        sector: (x, y),
        star,
        planets,
        station_name,
        threat,
        deposit,
    }
}
