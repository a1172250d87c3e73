//! Melee resolution shared by the player and monsters.
mod damage;

pub use damage::compute_damage;

use crate::state::{Character, EventLog};

/// What a single blow did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub damage: i32,
    /// The defender's hitpoints reached zero or below.
    pub killed: bool,
}

/// One blow from `attacker` to `defender`.
///
/// Costs the attacker one action point and logs either
/// "`A` attacked `D` for `N`" or "`A` killed `D`". The defender never strikes
/// back here; retaliation only happens on the defender's own turn.
pub fn attack(log: &mut EventLog, attacker: &mut Character, defender: &mut Character) -> AttackReport {
    attacker.action_points -= 1.0;

    let damage = compute_damage(attacker, defender);
    defender.hitpoints -= damage;

    let killed = !defender.is_alive();
    if killed {
        log.push(format!("{} killed {}", attacker.name, defender.name));
    } else {
        log.push(format!(
            "{} attacked {} for {}",
            attacker.name, defender.name, damage
        ));
    }

    AttackReport { damage, killed }
}
