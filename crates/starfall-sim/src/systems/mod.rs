//! Simulation systems, invoked by the engine in a fixed order within
//! each tick.

pub mod collision;
pub mod formation;
pub mod projectiles;
pub mod snapshot;
