//! Enemy entity - a hostile creature on the map

use rand::Rng;
use thiserror::Error;

use crate::events::DamageOutcome;
use crate::value_objects::{EnemyName, Position, PositionError};

/// Farthest an enemy may travel in a single move.
pub const MAX_STEP_DISTANCE: f64 = 10.0;

/// Error when an enemy attribute breaks its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnemyError {
    #[error("The enemy name cannot be blank or exceed 50 characters.")]
    InvalidName,
    #[error("The enemy health cannot be negative.")]
    InvalidHealth,
    #[error("The minimum damage must be greater than 0.")]
    InvalidMinDamage,
    #[error("The maximum damage must be greater than or equal to the minimum damage.")]
    InvalidMaxDamage,
    #[error(transparent)]
    Position(#[from] PositionError),
}

/// A hostile creature.
///
/// # Invariants
///
/// - `health` is never negative; the enemy is dead exactly when it is 0
/// - `0 < min_damage <= max_damage`
/// - `position` is always on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    name: EnemyName,
    health: i32,
    min_damage: i32,
    max_damage: i32,
    position: Position,
}

impl Enemy {
    /// Create an enemy at `(x, y)`.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::entities::Enemy;
    ///
    /// let goblin = Enemy::new("Goblin", 100, 10, 20, 0, 0).unwrap();
    /// assert!(!goblin.is_dead());
    /// assert_eq!(goblin.position().x(), 0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        health: i32,
        min_damage: i32,
        max_damage: i32,
        x: i32,
        y: i32,
    ) -> Result<Self, EnemyError> {
        let name = EnemyName::new(name)?;
        let health = validate_health(health)?;
        let (min_damage, max_damage) = validate_damage(min_damage, max_damage)?;
        let position = Position::new(x, y)?;
        Ok(Self {
            name,
            health,
            min_damage,
            max_damage,
            position,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &EnemyName {
        &self.name
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn min_damage(&self) -> i32 {
        self.min_damage
    }

    #[inline]
    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EnemyError> {
        self.name = EnemyName::new(name)?;
        Ok(())
    }

    /// Override health directly. Setting a positive value revives a dead enemy.
    pub fn set_health(&mut self, health: i32) -> Result<(), EnemyError> {
        self.health = validate_health(health)?;
        Ok(())
    }

    /// Replace the damage range; both bounds are checked together.
    pub fn set_damage(&mut self, min_damage: i32, max_damage: i32) -> Result<(), EnemyError> {
        let (min, max) = validate_damage(min_damage, max_damage)?;
        self.min_damage = min;
        self.max_damage = max;
        Ok(())
    }

    /// Teleport to `(x, y)`. No step limit applies.
    pub fn set_position(&mut self, x: i32, y: i32) -> Result<(), EnemyError> {
        self.position = Position::new(x, y)?;
        Ok(())
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Step by `(dx, dy)`.
    ///
    /// Returns false and stays put if the target is off the map or farther
    /// than [`MAX_STEP_DISTANCE`].
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        match self.position.offset(dx, dy) {
            Some(target) => self.step_to(target),
            None => false,
        }
    }

    /// Step to the absolute coordinates `(x, y)`.
    ///
    /// Same rules as [`move_by`](Self::move_by).
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        match Position::new(x, y) {
            Ok(target) => self.step_to(target),
            Err(_) => false,
        }
    }

    fn step_to(&mut self, target: Position) -> bool {
        if Position::distance(&self.position, &target) > MAX_STEP_DISTANCE {
            return false;
        }
        self.position = target;
        true
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Roll damage uniformly in `min_damage..=max_damage`.
    pub fn attack(&self) -> i32 {
        self.attack_with(|min, max| rand::thread_rng().gen_range(min..=max))
    }

    /// Roll damage with a caller-supplied roller.
    ///
    /// `roll` receives the inclusive bounds. Its result is clamped into them.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::entities::Enemy;
    ///
    /// let orc = Enemy::new("Orc", 80, 5, 9, 0, 0).unwrap();
    /// assert_eq!(orc.attack_with(|_, max| max), 9);
    /// assert_eq!(orc.attack_with(|_, _| 1000), 9);
    /// ```
    pub fn attack_with<F>(&self, roll: F) -> i32
    where
        F: FnOnce(i32, i32) -> i32,
    {
        if self.min_damage == self.max_damage {
            return self.min_damage;
        }
        roll(self.min_damage, self.max_damage).clamp(self.min_damage, self.max_damage)
    }

    /// Take a hit. Health bottoms out at 0; negative amounts do nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::entities::Enemy;
    /// use guildhall_domain::events::DamageOutcome;
    ///
    /// let mut goblin = Enemy::new("Goblin", 100, 10, 20, 0, 0).unwrap();
    /// assert_eq!(goblin.receive_damage(150), DamageOutcome::Killed { damage_dealt: 100 });
    /// assert_eq!(goblin.health(), 0);
    /// ```
    pub fn receive_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::AlreadyDead;
        }

        let damage_dealt = amount.clamp(0, self.health);
        self.health -= damage_dealt;

        if self.health == 0 {
            DamageOutcome::Killed { damage_dealt }
        } else {
            DamageOutcome::Wounded {
                damage_dealt,
                remaining_health: self.health,
            }
        }
    }
}

fn validate_health(health: i32) -> Result<i32, EnemyError> {
    if health >= 0 {
        Ok(health)
    } else {
        Err(EnemyError::InvalidHealth)
    }
}

fn validate_damage(min_damage: i32, max_damage: i32) -> Result<(i32, i32), EnemyError> {
    if min_damage <= 0 {
        return Err(EnemyError::InvalidMinDamage);
    }
    if max_damage < min_damage {
        return Err(EnemyError::InvalidMaxDamage);
    }
    Ok((min_damage, max_damage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Enemy {
        Enemy::new("Goblin", 100, 10, 20, 0, 0).unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn valid_enemy() {
            let enemy = goblin();
            assert_eq!(enemy.name().as_str(), "Goblin");
            assert_eq!(enemy.health(), 100);
            assert_eq!(enemy.min_damage(), 10);
            assert_eq!(enemy.max_damage(), 20);
            assert_eq!(enemy.position(), Position::origin());
            assert!(!enemy.is_dead());
        }

        #[test]
        fn invalid_name() {
            assert_eq!(Enemy::new("", 100, 10, 20, 0, 0), Err(EnemyError::InvalidName));
            assert_eq!(
                Enemy::new("A".repeat(51), 100, 10, 20, 0, 0),
                Err(EnemyError::InvalidName)
            );
        }

        #[test]
        fn invalid_damage_range() {
            assert_eq!(Enemy::new("Goblin", 100, 0, 20, 0, 0), Err(EnemyError::InvalidMinDamage));
            assert_eq!(Enemy::new("Goblin", 100, 20, 10, 0, 0), Err(EnemyError::InvalidMaxDamage));
        }

        #[test]
        fn invalid_health_and_position() {
            assert_eq!(Enemy::new("Goblin", -1, 10, 20, 0, 0), Err(EnemyError::InvalidHealth));
            assert_eq!(
                Enemy::new("Goblin", 100, 10, 20, 2000, 0),
                Err(EnemyError::Position(PositionError::InvalidX))
            );
        }

        #[test]
        fn spawned_with_zero_health_is_dead() {
            assert!(Enemy::new("Husk", 0, 1, 1, 0, 0).unwrap().is_dead());
        }
    }

    mod movement {
        use super::*;

        #[test]
        fn short_step_commits() {
            let mut enemy = goblin();
            assert!(enemy.move_by(5, 5));
            assert_eq!(enemy.position(), Position::new(5, 5).unwrap());
        }

        #[test]
        fn long_step_is_refused() {
            let mut enemy = goblin();
            assert!(enemy.move_by(5, 5));
            assert!(!enemy.move_by(20, 20));
            assert_eq!(enemy.position(), Position::new(5, 5).unwrap());
        }

        #[test]
        fn off_map_step_is_refused() {
            let mut enemy = Enemy::new("Goblin", 100, 10, 20, 1020, 510).unwrap();
            assert!(!enemy.move_by(5, 0));
            assert!(!enemy.move_by(0, 3));
            assert!(!enemy.move_by(-1021, 0));
            assert_eq!(enemy.position(), Position::new(1020, 510).unwrap());
        }

        #[test]
        fn move_to_absolute_target() {
            let mut enemy = Enemy::new("Goblin", 100, 10, 20, 10, 15).unwrap();
            assert!(enemy.move_to(15, 15));
            assert_eq!(enemy.position(), Position::new(15, 15).unwrap());
        }

        #[test]
        fn successive_moves_to() {
            let mut enemy = goblin();
            assert!(enemy.move_to(5, 0));
            assert!(enemy.move_to(10, 0));
            assert!(!enemy.move_to(25, 0));
            assert!(!enemy.move_to(-1, 0));
            assert_eq!(enemy.position(), Position::new(10, 0).unwrap());
        }

        #[test]
        fn step_exactly_at_limit_is_allowed() {
            let mut enemy = goblin();
            assert!(enemy.move_by(6, 8));
            assert_eq!(enemy.position(), Position::new(6, 8).unwrap());
        }

        #[test]
        fn set_position_ignores_step_limit() {
            let mut enemy = goblin();
            enemy.set_position(900, 400).unwrap();
            assert_eq!(enemy.position(), Position::new(900, 400).unwrap());
            assert_eq!(
                enemy.set_position(0, 513),
                Err(EnemyError::Position(PositionError::InvalidY))
            );
            assert_eq!(enemy.position(), Position::new(900, 400).unwrap());
        }
    }

    mod combat {
        use super::*;

        #[test]
        fn attack_within_range() {
            let enemy = goblin();
            for _ in 0..200 {
                let damage = enemy.attack();
                assert!((10..=20).contains(&damage));
            }
        }

        #[test]
        fn fixed_damage_always_same() {
            let enemy = Enemy::new("Goblin", 100, 15, 15, 0, 0).unwrap();
            for _ in 0..10 {
                assert_eq!(enemy.attack(), 15);
            }
        }

        #[test]
        fn attack_with_passes_bounds_and_clamps() {
            let enemy = goblin();
            assert_eq!(enemy.attack_with(|min, _| min), 10);
            assert_eq!(enemy.attack_with(|_, max| max), 20);
            assert_eq!(enemy.attack_with(|_, _| -5), 10);
        }

        #[test]
        fn receive_damage_wounds() {
            let mut enemy = goblin();
            assert_eq!(
                enemy.receive_damage(50),
                DamageOutcome::Wounded {
                    damage_dealt: 50,
                    remaining_health: 50
                }
            );
            assert_eq!(enemy.health(), 50);
        }

        #[test]
        fn receive_damage_never_below_zero() {
            let mut enemy = goblin();
            assert_eq!(enemy.receive_damage(150), DamageOutcome::Killed { damage_dealt: 100 });
            assert_eq!(enemy.health(), 0);
            assert!(enemy.is_dead());
        }

        #[test]
        fn dead_enemy_stays_dead() {
            let mut enemy = Enemy::new("Goblin", 50, 10, 20, 0, 0).unwrap();
            enemy.receive_damage(30);
            assert!(!enemy.is_dead());
            enemy.receive_damage(20);
            assert!(enemy.is_dead());
            assert_eq!(enemy.receive_damage(10), DamageOutcome::AlreadyDead);
            assert_eq!(enemy.health(), 0);
        }

        #[test]
        fn negative_damage_does_not_heal() {
            let mut enemy = goblin();
            let outcome = enemy.receive_damage(-40);
            assert_eq!(outcome.damage_dealt(), 0);
            assert_eq!(enemy.health(), 100);
        }

        #[test]
        fn set_health_kills_and_revives() {
            let mut enemy = goblin();
            enemy.set_health(0).unwrap();
            assert!(enemy.is_dead());
            enemy.set_health(25).unwrap();
            assert!(!enemy.is_dead());
            assert_eq!(enemy.set_health(-1), Err(EnemyError::InvalidHealth));
            assert_eq!(enemy.health(), 25);
        }

        #[test]
        fn set_damage_checks_both_bounds() {
            let mut enemy = goblin();
            assert_eq!(enemy.set_damage(0, 5), Err(EnemyError::InvalidMinDamage));
            assert_eq!(enemy.set_damage(8, 7), Err(EnemyError::InvalidMaxDamage));
            assert_eq!((enemy.min_damage(), enemy.max_damage()), (10, 20));
            enemy.set_damage(3, 3).unwrap();
            assert_eq!(enemy.attack(), 3);
        }
    }
}
