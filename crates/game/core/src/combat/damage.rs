//! Damage calculation.

use crate::state::Character;

/// Damage `attacker` deals to `defender` in one blow.
///
/// # Formula
///
/// ```text
/// damage = strength
/// if attacker has a weapon:  damage = trunc(damage * weapon.power)
/// if defender has a helmet:  damage = trunc(damage * (1 - helmet.power))
/// ```
///
/// Each multiplication truncates toward zero before the next one applies.
pub fn compute_damage(attacker: &Character, defender: &Character) -> i32 {
    let mut damage = attacker.strength;

    if let Some(power) = attacker.equipment.weapon_power() {
        damage = scale(damage, power);
    }
    if let Some(power) = defender.equipment.helmet_power() {
        damage = scale(damage, 1.0 - power);
    }

    damage
}

fn scale(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemArchetype;
    use crate::state::{ItemId, Position};

    fn fighter(strength: i32) -> Character {
        Character::new("fighter", 'f', Position::ORIGIN).with_strength(strength)
    }

    #[test]
    fn bare_hands_deal_strength() {
        assert_eq!(compute_damage(&fighter(5), &fighter(1)), 5);
    }

    #[test]
    fn weapon_then_helmet_truncate_in_order() {
        let mut attacker = fighter(5);
        let mut defender = fighter(1);
        attacker
            .equipment
            .equip(ItemArchetype::Sword.create(ItemId(0), Position::ORIGIN))
            .unwrap();
        defender
            .equipment
            .equip(ItemArchetype::Helmet.create(ItemId(1), Position::ORIGIN))
            .unwrap();

        assert_eq!(compute_damage(&attacker, &defender), 5);
    }

    #[test]
    fn helmet_rounds_toward_zero() {
        let mut defender = fighter(1);
        defender
            .equipment
            .equip(ItemArchetype::Helmet.create(ItemId(0), Position::ORIGIN))
            .unwrap();

        assert_eq!(compute_damage(&fighter(1), &defender), 0);
        assert_eq!(compute_damage(&fighter(3), &defender), 1);
    }
}
