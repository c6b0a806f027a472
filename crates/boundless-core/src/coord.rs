//! Unbounded board coordinate representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a coordinate key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("invalid coordinate key: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid x component: {0}")]
    InvalidX(String),

    #[error("invalid y component: {0}")]
    InvalidY(String),
}

/// A square on the unbounded board.
///
/// There is no packed index like on a classical 8x8 board; a square is a
/// pair of signed 64-bit integers. The textual form `"x,y"` is the key
/// notation used wherever a square has to name itself (special-rights
/// keys, logs, test fixtures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    /// The board origin.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Creates a coordinate from its components.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// Returns the coordinate shifted by the given deltas.
    #[inline]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the key notation for this coordinate (e.g., "5,1").
    pub fn to_key(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(CoordParseError::InvalidPartCount(parts.len()));
        }

        let x = parts[0]
            .parse::<i64>()
            .map_err(|_| CoordParseError::InvalidX(parts[0].to_string()))?;
        let y = parts[1]
            .parse::<i64>()
            .map_err(|_| CoordParseError::InvalidY(parts[1].to_string()))?;

        Ok(Coord::new(x, y))
    }
}
