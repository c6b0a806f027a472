//! Move history with view navigation.
//!
//! The history owns the committed moves and a cursor over them. Scrubbing
//! the cursor replays only local state, so a user browsing past positions
//! never disturbs the timeline fields; committing a move or taking one
//! back replays global state as well.

use std::fmt;

use crate::replay::{apply_move, Scope};
use crate::{GameState, Move};

/// Error type for history operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Cannot commit a move while viewing a past position.
    NotAtFront,
    /// Already viewing the first position.
    AtStart,
    /// Already viewing the present position.
    AtFront,
    /// No moves have been played.
    Empty,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotAtFront => {
                write!(f, "cannot play a move while viewing a past position")
            }
            HistoryError::AtStart => write!(f, "already viewing the first position"),
            HistoryError::AtFront => write!(f, "already viewing the present position"),
            HistoryError::Empty => write!(f, "no moves have been played"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// A game's committed move list plus the position currently in view.
///
/// The game state passed into each method must be the same object across
/// calls: the history assumes it reflects whatever position the cursor
/// pointed at after the previous call.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    /// Committed moves, oldest first.
    moves: Vec<Move>,
    /// How many of them are applied to the game state right now.
    viewed: usize,
}

impl MoveHistory {
    /// Creates an empty history viewing the starting position.
    pub fn new() -> Self {
        MoveHistory::default()
    }

    /// Returns the number of committed moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no moves have been committed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the committed moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns how many moves are currently applied to the game state.
    pub fn viewed(&self) -> usize {
        self.viewed
    }

    /// Returns true if the view is at the present position.
    pub fn is_at_front(&self) -> bool {
        self.viewed == self.moves.len()
    }

    /// Commits a move to the timeline, applying all of its recorded state.
    ///
    /// Timeline fields belong to the present, so committing is only legal
    /// while the view is at the front.
    pub fn play(&mut self, mov: Move, state: &mut GameState) -> Result<(), HistoryError> {
        if !self.is_at_front() {
            return Err(HistoryError::NotAtFront);
        }
        apply_move(state, &mov, true, Scope::Global);
        self.moves.push(mov);
        self.viewed += 1;
        Ok(())
    }

    /// Removes the newest move from the timeline, unwinding all of its
    /// recorded state, and returns it.
    ///
    /// A rewound view is first fast-forwarded so the unwind starts from
    /// the committed position.
    pub fn take_back(&mut self, state: &mut GameState) -> Result<Move, HistoryError> {
        if self.moves.is_empty() {
            return Err(HistoryError::Empty);
        }
        self.view_front(state);

        let mov = match self.moves.pop() {
            Some(mov) => mov,
            None => unreachable!(),
        };
        apply_move(state, &mov, false, Scope::Global);
        self.viewed = self.moves.len();
        Ok(mov)
    }

    /// Steps the view one move toward the start. Timeline state is
    /// untouched.
    pub fn view_backward(&mut self, state: &mut GameState) -> Result<(), HistoryError> {
        if self.viewed == 0 {
            return Err(HistoryError::AtStart);
        }
        apply_move(state, &self.moves[self.viewed - 1], false, Scope::Local);
        self.viewed -= 1;
        Ok(())
    }

    /// Steps the view one move toward the present. Timeline state is
    /// untouched.
    pub fn view_forward(&mut self, state: &mut GameState) -> Result<(), HistoryError> {
        if self.is_at_front() {
            return Err(HistoryError::AtFront);
        }
        apply_move(state, &self.moves[self.viewed], true, Scope::Local);
        self.viewed += 1;
        Ok(())
    }

    /// Fast-forwards the view to the present position.
    pub fn view_front(&mut self, state: &mut GameState) {
        while !self.is_at_front() {
            apply_move(state, &self.moves[self.viewed], true, Scope::Local);
            self.viewed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{record_check, record_en_passant, record_move_rule};
    use boundless_core::{Coord, EnPassant};

    fn double_push(state: &mut GameState) -> Move {
        let mut mov = Move::new(Coord::new(3, 2), Coord::new(3, 4));
        record_check(&mut mov, state.in_check.clone(), None, state);
        record_en_passant(
            &mut mov,
            state.en_passant,
            Some(EnPassant::new(Coord::new(3, 3), Coord::new(3, 4))),
        );
        let rule = state.move_rule;
        record_move_rule(&mut mov, rule, 0);
        mov
    }

    fn checking_move(state: &mut GameState) -> Move {
        let mut mov = Move::new(Coord::new(4, 8), Coord::new(3, 7));
        record_check(
            &mut mov,
            state.in_check.clone(),
            Some(vec![Coord::new(5, 1)]),
            state,
        );
        record_en_passant(&mut mov, state.en_passant, None);
        let rule = state.move_rule;
        record_move_rule(&mut mov, rule, rule + 1);
        mov
    }

    #[test]
    fn new_history() {
        let history = MoveHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.viewed(), 0);
        assert!(history.is_at_front());
    }

    #[test]
    fn play_applies_global_state() {
        let mut state = GameState::new();
        state.move_rule = 5;
        let mut history = MoveHistory::new();

        let mov = double_push(&mut state);
        history.play(mov, &mut state).unwrap();

        assert_eq!(history.len(), 1);
        assert!(state.en_passant.is_some());
        assert_eq!(state.move_rule, 0);
    }

    #[test]
    fn scrubbing_preserves_timeline_state() {
        let mut state = GameState::new();
        let mut history = MoveHistory::new();

        let first = double_push(&mut state);
        history.play(first, &mut state).unwrap();
        let second = checking_move(&mut state);
        history.play(second, &mut state).unwrap();

        assert!(state.is_check());
        assert_eq!(state.en_passant, None);
        assert_eq!(state.move_rule, 1);

        // Scrub to the start: check status follows the view, the timeline
        // fields stay at their committed values.
        history.view_backward(&mut state).unwrap();
        history.view_backward(&mut state).unwrap();
        assert_eq!(history.viewed(), 0);
        assert!(!state.is_check());
        assert_eq!(state.en_passant, None);
        assert_eq!(state.move_rule, 1);

        // And back to the front.
        history.view_forward(&mut state).unwrap();
        history.view_forward(&mut state).unwrap();
        assert!(history.is_at_front());
        assert!(state.is_check());
    }

    #[test]
    fn take_back_restores_timeline_state() {
        let mut state = GameState::new();
        state.move_rule = 5;
        let mut history = MoveHistory::new();

        let mov = double_push(&mut state);
        history.play(mov, &mut state).unwrap();
        assert!(state.en_passant.is_some());

        let taken = history.take_back(&mut state).unwrap();
        assert_eq!(taken.from, Coord::new(3, 2));
        assert!(history.is_empty());
        assert_eq!(state.en_passant, None);
        assert_eq!(state.move_rule, 5);
    }

    #[test]
    fn take_back_from_rewound_view() {
        let mut state = GameState::new();
        let mut history = MoveHistory::new();

        let first = double_push(&mut state);
        history.play(first, &mut state).unwrap();
        let second = checking_move(&mut state);
        history.play(second, &mut state).unwrap();

        history.view_backward(&mut state).unwrap();
        history.view_backward(&mut state).unwrap();

        // Fast-forwards internally, then unwinds the checking move.
        history.take_back(&mut state).unwrap();
        assert_eq!(history.len(), 1);
        assert!(history.is_at_front());
        assert!(!state.is_check());
        assert!(state.en_passant.is_some());
        assert_eq!(state.move_rule, 0);
    }

    #[test]
    fn play_while_rewound_is_rejected() {
        let mut state = GameState::new();
        let mut history = MoveHistory::new();

        let mov = double_push(&mut state);
        history.play(mov, &mut state).unwrap();
        history.view_backward(&mut state).unwrap();

        let late = Move::new(Coord::new(7, 7), Coord::new(7, 5));
        let result = history.play(late, &mut state);
        assert_eq!(result, Err(HistoryError::NotAtFront));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn navigation_bounds() {
        let mut state = GameState::new();
        let mut history = MoveHistory::new();

        assert_eq!(history.view_backward(&mut state), Err(HistoryError::AtStart));
        assert_eq!(history.view_forward(&mut state), Err(HistoryError::AtFront));
        assert!(matches!(
            history.take_back(&mut state),
            Err(HistoryError::Empty)
        ));
    }
}
