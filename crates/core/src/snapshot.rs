//! Snapshot module - a read-only copy of the game for renderers

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::game_state::{GameState, TargetSlot};
use crate::types::{Position, SpeedLevel, WordCategory, MAX_WORD_LEN};
use crate::words::Word;

/// Read-only view of everything the front end draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub word: &'static str,
    pub category: WordCategory,
    pub targets: ArrayVec<TargetSlot, MAX_WORD_LEN>,
    pub matched: ArrayVec<Position, MAX_WORD_LEN>,
    pub collected_letters: Vec<char>,
    pub burned_letters: Vec<char>,
    pub word_completed: bool,
    pub speed: SpeedLevel,
    pub sound_enabled: bool,
    pub fast_falling: bool,
}

impl GameSnapshot {
    /// Snapshot of the model alone; controller settings start at their defaults.
    pub fn from_state(state: &GameState) -> Self {
        let mut s = Self {
            board: Board::new(),
            word: "",
            category: WordCategory::FamousFigures,
            targets: ArrayVec::new(),
            matched: ArrayVec::new(),
            collected_letters: Vec::new(),
            burned_letters: Vec::new(),
            word_completed: false,
            speed: SpeedLevel::default(),
            sound_enabled: false,
            fast_falling: false,
        };
        s.update_from(state);
        s
    }

    /// Refresh the model-derived fields, reusing allocations
    pub fn update_from(&mut self, state: &GameState) {
        state.write_board(&mut self.board);
        let word = state.current_word();
        self.word = word.text;
        self.category = word.category;
        self.targets = state.target_positions();
        self.matched.clear();
        self.matched.extend(
            state
                .matched_positions()
                .iter()
                .copied()
                .take(MAX_WORD_LEN),
        );
        self.collected_letters.clear();
        self.collected_letters
            .extend_from_slice(state.collected_letters());
        self.burned_letters.clear();
        self.burned_letters.extend_from_slice(state.burned_letters());
        self.word_completed = state.is_word_completed();
    }

    pub fn is_matched(&self, pos: Position) -> bool {
        self.matched.contains(&pos)
    }

    pub fn is_target(&self, pos: Position) -> bool {
        self.targets.iter().any(|s| s.position() == pos)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let empty = Word::new("", WordCategory::FamousFigures);
        Self::from_state(&GameState::with_word(
            empty,
            Position::default(),
            Position::default(),
        ))
    }
}
