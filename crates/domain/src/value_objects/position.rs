//! Bounded 2D map coordinates
//!
//! The playable map spans `0..=1024` horizontally and `0..=512` vertically.
//! A [`Position`] can only hold coordinates inside that rectangle.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest valid x coordinate.
pub const MAX_X: i32 = 1024;

/// Largest valid y coordinate.
pub const MAX_Y: i32 = 512;

/// Error when a coordinate falls outside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("The x coordinate must be between 0 and 1024.")]
    InvalidX,
    #[error("The y coordinate must be between 0 and 512.")]
    InvalidY,
}

#[derive(Deserialize)]
struct PositionWire {
    x: i32,
    y: i32,
}

/// A point on the map, valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionWire")]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Create a position, rejecting coordinates outside the map.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::value_objects::{Position, PositionError};
    ///
    /// let p = Position::new(512, 256).unwrap();
    /// assert_eq!((p.x(), p.y()), (512, 256));
    /// assert_eq!(Position::new(1025, 0), Err(PositionError::InvalidX));
    /// ```
    pub fn new(x: i32, y: i32) -> Result<Self, PositionError> {
        Ok(Self {
            x: validate_x(x)?,
            y: validate_y(y)?,
        })
    }

    /// The map origin (0, 0).
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) -> Result<(), PositionError> {
        self.x = validate_x(x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: i32) -> Result<(), PositionError> {
        self.y = validate_y(y)?;
        Ok(())
    }

    /// Translate by a delta, or `None` if the result would leave the map.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        Self::new(x, y).ok()
    }

    /// Euclidean distance between two positions.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::value_objects::Position;
    ///
    /// let a = Position::new(0, 0).unwrap();
    /// let b = Position::new(3, 4).unwrap();
    /// assert_eq!(Position::distance(&a, &b), 5.0);
    /// ```
    pub fn distance(a: &Position, b: &Position) -> f64 {
        let dx = f64::from(b.x - a.x);
        let dy = f64::from(b.y - a.y);
        dx.hypot(dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<PositionWire> for Position {
    type Error = PositionError;

    fn try_from(wire: PositionWire) -> Result<Self, Self::Error> {
        Self::new(wire.x, wire.y)
    }
}

fn validate_x(x: i32) -> Result<i32, PositionError> {
    if (0..=MAX_X).contains(&x) {
        Ok(x)
    } else {
        Err(PositionError::InvalidX)
    }
}

fn validate_y(y: i32) -> Result<i32, PositionError> {
    if (0..=MAX_Y).contains(&y) {
        Ok(y)
    } else {
        Err(PositionError::InvalidY)
    }
}
