//! Formation system: advances the enemy grid one formation-tick and
//! samples enemy fire.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::entities::{Enemy, Formation};
use starfall_core::rules::GameRules;

/// What one formation-tick produced.
#[derive(Debug, Default)]
pub struct FormationOutcome {
    /// A live enemy's bottom edge already sat at or past the invasion
    /// line; movement was skipped and the session is over.
    pub landed: bool,
    /// Indices of enemies that fired this tick, in grid order.
    pub shooters: Vec<usize>,
}

/// Advance the formation one tick.
///
/// The invasion check and the edge check both use pre-move positions.
/// An edge bounce flips the direction and descends every live enemy in
/// the same tick, with no lateral movement; otherwise the whole grid
/// steps sideways. Destroyed enemies are excluded from both checks,
/// from movement, and from fire sampling, so the RNG stream depends
/// only on the live set.
pub fn run(
    enemies: &mut [Enemy],
    formation: &mut Formation,
    rules: &GameRules,
    rng: &mut ChaCha8Rng,
) -> FormationOutcome {
    let mut outcome = FormationOutcome::default();

    let lowest = enemies
        .iter()
        .filter(|e| !e.destroyed)
        .map(|e| e.rect.bottom())
        .fold(f32::MIN, f32::max);

    if lowest >= rules.invasion_line {
        outcome.landed = true;
    } else {
        let step = formation.direction.sign() * formation.speed;
        let would_cross = enemies.iter().filter(|e| !e.destroyed).any(|e| {
            let x = e.rect.pos.x + step;
            x < 0.0 || x + e.rect.size.x > rules.field.x
        });

        if would_cross {
            formation.direction = formation.direction.flipped();
            for enemy in enemies.iter_mut().filter(|e| !e.destroyed) {
                enemy.rect.pos.y += rules.descent_step;
            }
        } else {
            for enemy in enemies.iter_mut().filter(|e| !e.destroyed) {
                enemy.rect.pos.x += step;
            }
        }
    }

    for (index, enemy) in enemies.iter().enumerate() {
        if !enemy.destroyed && rng.gen_bool(rules.enemy_fire_probability) {
            outcome.shooters.push(index);
        }
    }

    outcome
}
