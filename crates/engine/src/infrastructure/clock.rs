//! Clock and random implementations.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - thread RNG, or a seeded `StdRng` for reproducible runs.
pub struct SystemRandom {
    seeded: Option<Mutex<StdRng>>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Seeded when a seed is configured, thread RNG otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.is_some()
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(low..=high)
            }
            None => rand::thread_rng().gen_range(low..=high),
        }
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl FixedClock {
    /// Midday UTC on the given calendar date.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        use chrono::TimeZone;
        Self(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..500 {
            let roll = random.gen_range(3, 7);
            assert!((3..=7).contains(&roll));
        }
    }

    #[test]
    fn equal_bounds_return_that_value() {
        assert_eq!(SystemRandom::new().gen_range(4, 4), 4);
        assert_eq!(SystemRandom::seeded(1).gen_range(4, 4), 4);
    }

    #[test]
    fn reversed_bounds_are_tolerated() {
        let roll = SystemRandom::new().gen_range(9, 2);
        assert!((2..=9).contains(&roll));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SystemRandom::seeded(42);
        let b = SystemRandom::seeded(42);
        let rolls_a: Vec<i32> = (0..20).map(|_| a.gen_range(1, 100)).collect();
        let rolls_b: Vec<i32> = (0..20).map(|_| b.gen_range(1, 100)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn from_seed_picks_source() {
        assert!(SystemRandom::from_seed(Some(7)).is_seeded());
        assert!(!SystemRandom::from_seed(None).is_seeded());
    }

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock::on(2024, 5, 1);
        assert_eq!(clock.now().date_naive().to_string(), "2024-05-01");
    }
}
