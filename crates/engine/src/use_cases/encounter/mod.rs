//! Encounter use cases.
//!
//! Drives a single enemy: attack rolls come from the `RandomPort`, damage and
//! movement go through the enemy's own rules.

use std::sync::Arc;

use guildhall_domain::{DamageOutcome, Enemy};

use crate::infrastructure::ports::RandomPort;

/// Encounter use case.
pub struct Encounter {
    random: Arc<dyn RandomPort>,
}

impl Encounter {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll the enemy's attack damage.
    pub fn strike(&self, enemy: &Enemy) -> i32 {
        let damage = enemy.attack_with(|min, max| self.random.gen_range(min, max));
        tracing::debug!(enemy = %enemy.name(), damage, "Enemy attack rolled");
        damage
    }

    /// Apply `amount` damage to the enemy.
    pub fn hit(&self, enemy: &mut Enemy, amount: i32) -> DamageOutcome {
        let outcome = enemy.receive_damage(amount);
        match outcome {
            DamageOutcome::Killed { damage_dealt } => {
                tracing::info!(enemy = %enemy.name(), damage_dealt, "Enemy killed");
            }
            DamageOutcome::Wounded {
                damage_dealt,
                remaining_health,
            } => {
                tracing::info!(enemy = %enemy.name(), damage_dealt, remaining_health, "Enemy wounded");
            }
            DamageOutcome::AlreadyDead => {
                tracing::warn!(enemy = %enemy.name(), "Hit on an enemy that is already dead");
            }
        }
        outcome
    }

    /// Move the enemy by a delta. Returns false and leaves it in place when the
    /// step is refused.
    pub fn advance(&self, enemy: &mut Enemy, dx: i32, dy: i32) -> bool {
        let from = enemy.position();
        let moved = enemy.move_by(dx, dy);
        if moved {
            tracing::info!(enemy = %enemy.name(), %from, to = %enemy.position(), "Enemy moved");
        } else {
            tracing::warn!(enemy = %enemy.name(), %from, dx, dy, "Enemy move refused");
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::test_fixtures::random;
    use mockall::predicate::eq;

    fn goblin() -> Enemy {
        Enemy::new("Goblin", 30, 2, 6, 0, 0).unwrap()
    }

    #[test]
    fn strike_rolls_between_damage_bounds() {
        let mut mock = MockRandomPort::new();
        mock.expect_gen_range()
            .with(eq(2), eq(6))
            .times(1)
            .returning(|_, _| 5);

        let encounter = Encounter::new(Arc::new(mock));
        assert_eq!(encounter.strike(&goblin()), 5);
    }

    #[test]
    fn strike_with_fixed_damage_skips_the_roll() {
        let mut mock = MockRandomPort::new();
        mock.expect_gen_range().never();

        let ogre = Enemy::new("Ogre", 50, 7, 7, 10, 10).unwrap();
        assert_eq!(Encounter::new(Arc::new(mock)).strike(&ogre), 7);
    }

    #[test]
    fn out_of_range_roll_is_clamped() {
        let encounter = Encounter::new(Arc::new(FixedRandom(99)));
        assert_eq!(encounter.strike(&goblin()), 6);
    }

    #[test]
    fn hit_wounds_then_kills() {
        let encounter = Encounter::new(random(0));
        let mut enemy = goblin();

        assert_eq!(
            encounter.hit(&mut enemy, 12),
            DamageOutcome::Wounded {
                damage_dealt: 12,
                remaining_health: 18
            }
        );
        assert_eq!(
            encounter.hit(&mut enemy, 50),
            DamageOutcome::Killed { damage_dealt: 18 }
        );
        assert!(enemy.is_dead());
        assert_eq!(encounter.hit(&mut enemy, 5), DamageOutcome::AlreadyDead);
    }

    #[test]
    fn advance_respects_step_limit() {
        let encounter = Encounter::new(random(0));
        let mut enemy = goblin();

        assert!(encounter.advance(&mut enemy, 5, 5));
        assert_eq!((enemy.position().x(), enemy.position().y()), (5, 5));

        assert!(!encounter.advance(&mut enemy, 20, 20));
        assert_eq!((enemy.position().x(), enemy.position().y()), (5, 5));
    }

    #[test]
    fn advance_off_the_map_refused() {
        let encounter = Encounter::new(random(0));
        let mut enemy = goblin();
        assert!(!encounter.advance(&mut enemy, -1, 0));
        assert_eq!(enemy.position().x(), 0);
    }
}
