//! En passant capture state.

use crate::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An available en passant capture.
///
/// `square` is the capture destination and `pawn` the doubled pawn that
/// would be taken there. On an unbounded board the pawn's square cannot be
/// derived from the capture square (pawns may double-step from any
/// configured rank), so both are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassant {
    /// The square a capturing pawn lands on.
    pub square: Coord,
    /// The square of the pawn being captured.
    pub pawn: Coord,
}

impl EnPassant {
    /// Creates en passant state from the capture square and the pawn square.
    #[inline]
    pub const fn new(square: Coord, pawn: Coord) -> Self {
        EnPassant { square, pawn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_passant_new() {
        let ep = EnPassant::new(Coord::new(3, 6), Coord::new(3, 5));
        assert_eq!(ep.square, Coord::new(3, 6));
        assert_eq!(ep.pawn, Coord::new(3, 5));
    }
}
