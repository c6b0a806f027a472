//! Per-move records of derived state transitions.

use boundless_core::{Attacker, Coord, EnPassant};

/// One recorded transition of a single tracked game-state property.
///
/// A change captures the value before the move (`current`) and after it
/// (`future`); replay writes one side or the other depending on direction.
/// Records never change once their move is fully constructed: replay
/// mutates the game state, not the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// The check indicator: `None` when no royal is attacked, otherwise
    /// the list of threatened royal squares.
    Check {
        current: Option<Vec<Coord>>,
        future: Option<Vec<Coord>>,
    },
    /// The pieces delivering check. Empty when there is none.
    Attackers {
        current: Vec<Attacker>,
        future: Vec<Attacker>,
    },
    /// En passant availability created or consumed by the move.
    EnPassant {
        current: Option<EnPassant>,
        future: Option<EnPassant>,
    },
    /// One square gaining or losing its special-move right.
    SpecialRight {
        square: Coord,
        current: bool,
        future: bool,
    },
    /// The move-rule counter before and after the move.
    MoveRule { current: u32, future: u32 },
}

/// The ordered state-change records belonging to one move.
///
/// `local` holds changes intrinsic to the resulting position (check,
/// attackers); they are replayed on every traversal of the move. `global`
/// holds changes to timeline state (en passant, special rights, move-rule
/// counter); they are replayed only when the move is committed to the game
/// or removed from it.
///
/// Both sequences are append-only and ordered: replay processes records
/// strictly in insertion order in either direction, because a later record
/// may assume earlier ones have been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveState {
    pub local: Vec<StateChange>,
    pub global: Vec<StateChange>,
}

impl MoveState {
    /// Creates an empty record set.
    #[inline]
    pub const fn new() -> Self {
        MoveState {
            local: Vec::new(),
            global: Vec::new(),
        }
    }

    /// Returns true if no changes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.global.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_state_starts_empty() {
        let state = MoveState::new();
        assert!(state.is_empty());
        assert!(state.local.is_empty());
        assert!(state.global.is_empty());
    }

    #[test]
    fn move_state_not_empty_after_push() {
        let mut state = MoveState::new();
        state.global.push(StateChange::MoveRule {
            current: 3,
            future: 0,
        });
        assert!(!state.is_empty());
    }
}
