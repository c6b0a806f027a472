//! Attacking piece descriptions.

use crate::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece attacking a royal square.
///
/// `sliding` distinguishes ray attacks, which a defender can answer by
/// interposing anywhere between attacker and target, from fixed-offset
/// attacks that can only be answered by capture or evasion. Pieces whose
/// attack follows a bent line additionally carry the exact squares a
/// defender may block on in `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attacker {
    /// The attacking piece's square.
    pub coords: Coord,
    /// True if the attack travels along a ray.
    pub sliding: bool,
    /// Blockable squares for attacks that do not follow a straight ray.
    pub path: Option<Vec<Coord>>,
}

impl Attacker {
    /// Creates an attacker with no explicit blocking path.
    #[inline]
    pub const fn new(coords: Coord, sliding: bool) -> Self {
        Attacker {
            coords,
            sliding,
            path: None,
        }
    }

    /// Attaches the squares a defender may interpose on.
    pub fn with_path(mut self, path: Vec<Coord>) -> Self {
        self.path = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacker_new() {
        let a = Attacker::new(Coord::new(8, 8), true);
        assert_eq!(a.coords, Coord::new(8, 8));
        assert!(a.sliding);
        assert!(a.path.is_none());
    }

    #[test]
    fn attacker_with_path() {
        let a = Attacker::new(Coord::new(2, 3), true)
            .with_path(vec![Coord::new(3, 4), Coord::new(4, 5)]);
        assert_eq!(a.path, Some(vec![Coord::new(3, 4), Coord::new(4, 5)]));
    }
}
