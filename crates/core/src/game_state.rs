//! Game state module - the word game model
//!
//! Holds the round (target word, book and fire), the single falling letter and
//! the per-session letter logs. Every transition is a plain method: no I/O, no
//! timers, and randomness only through an explicit [`RandomSource`] argument.
//! The controller decides when transitions run and what to tell the player.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::*;
use crate::words::{random_word, Word};

/// The single falling letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveLetter {
    /// Monotonic per-game id, for UI keying only
    pub id: u32,
    pub letter: char,
    pub position: Position,
}

/// A letter that filled a target slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedLetter {
    pub letter: char,
    pub position: Position,
}

/// One letter of the target word at its board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSlot {
    pub letter: char,
    pub x: u8,
    pub y: u8,
}

impl TargetSlot {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Target slots of `word`, centered on [`TARGET_ROW`].
///
/// `start_x = floor((BOARD_WIDTH - len) / 2)`; letters beyond the board
/// width are dropped.
///
/// ```
/// use wordris_core::target_positions;
/// use wordris_core::types::TARGET_ROW;
///
/// let slots = target_positions("BAMSE");
/// assert_eq!(slots.len(), 5);
/// assert_eq!((slots[0].letter, slots[0].x, slots[0].y), ('B', 1, TARGET_ROW));
/// assert_eq!(slots[4].x, 5);
/// ```
pub fn target_positions(word: &str) -> ArrayVec<TargetSlot, MAX_WORD_LEN> {
    let len = word.chars().count().min(MAX_WORD_LEN);
    let start_x = (MAX_WORD_LEN - len) / 2;
    word.chars()
        .take(MAX_WORD_LEN)
        .enumerate()
        .map(|(i, letter)| TargetSlot {
            letter,
            x: (start_x + i) as u8,
            y: TARGET_ROW,
        })
        .collect()
}

/// Columns not covered by the target word
fn free_columns(word: &str) -> ArrayVec<u8, MAX_WORD_LEN> {
    let slots = target_positions(word);
    (0..BOARD_WIDTH)
        .filter(|x| !slots.iter().any(|s| s.x == *x))
        .collect()
}

/// Random column from `allowed`, or from the whole width when nothing is allowed
fn random_column(rng: &mut impl RandomSource, allowed: &[u8]) -> u8 {
    match rng.pick(allowed) {
        Some(&x) => x,
        None => rng.next_below(BOARD_WIDTH as u32) as u8,
    }
}

fn random_row(rng: &mut impl RandomSource, min: u8, max: u8) -> u8 {
    min + rng.next_below((max - min + 1) as u32) as u8
}

/// Book position: a column outside the target word, a row in the book band
pub fn random_book_position(rng: &mut impl RandomSource, word: &str) -> Position {
    let allowed = free_columns(word);
    let x = random_column(rng, &allowed);
    let y = random_row(rng, BOOK_MIN_ROW, BOOK_MAX_ROW);
    Position::new(x, y)
}

/// Fire position: a column outside the target word and the book column
pub fn random_fire_position(rng: &mut impl RandomSource, word: &str, book: Position) -> Position {
    let mut allowed = free_columns(word);
    allowed.retain(|x| *x != book.x);
    let x = if allowed.is_empty() {
        // Word too wide to keep fire off it; at least keep it off the book column.
        let others: ArrayVec<u8, MAX_WORD_LEN> =
            (0..BOARD_WIDTH).filter(|x| *x != book.x).collect();
        random_column(rng, &others)
    } else {
        random_column(rng, &allowed)
    };
    let y = random_row(rng, FIRE_MIN_ROW, FIRE_MAX_ROW);
    Position::new(x, y)
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    active_letter: Option<ActiveLetter>,
    placed_letters: Vec<PlacedLetter>,
    matched_positions: Vec<Position>,
    collected_letters: Vec<char>,
    burned_letters: Vec<char>,
    is_word_completed: bool,
    book_position: Position,
    fire_position: Position,
    current_word: Word,
    /// Id handed to the next spawned letter
    next_letter_id: u32,
}

impl GameState {
    /// Fresh game: random word, book and fire placed off the word's columns
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let word = random_word(rng);
        let book = random_book_position(rng, word.text);
        let fire = random_fire_position(rng, word.text, book);
        Self::with_word(word, book, fire)
    }

    /// Fresh game with a fixed layout
    pub fn with_word(word: Word, book_position: Position, fire_position: Position) -> Self {
        Self {
            active_letter: None,
            placed_letters: Vec::with_capacity(MAX_WORD_LEN),
            matched_positions: Vec::with_capacity(MAX_WORD_LEN),
            collected_letters: Vec::new(),
            burned_letters: Vec::new(),
            is_word_completed: false,
            book_position,
            fire_position,
            current_word: word,
            next_letter_id: 1,
        }
    }

    pub fn active_letter(&self) -> Option<ActiveLetter> {
        self.active_letter
    }

    pub fn placed_letters(&self) -> &[PlacedLetter] {
        &self.placed_letters
    }

    pub fn matched_positions(&self) -> &[Position] {
        &self.matched_positions
    }

    pub fn collected_letters(&self) -> &[char] {
        &self.collected_letters
    }

    pub fn burned_letters(&self) -> &[char] {
        &self.burned_letters
    }

    pub fn is_word_completed(&self) -> bool {
        self.is_word_completed
    }

    pub fn book_position(&self) -> Position {
        self.book_position
    }

    pub fn fire_position(&self) -> Position {
        self.fire_position
    }

    pub fn current_word(&self) -> Word {
        self.current_word
    }

    pub fn target_positions(&self) -> ArrayVec<TargetSlot, MAX_WORD_LEN> {
        target_positions(self.current_word.text)
    }

    /// Target slots not yet filled
    pub fn remaining_slots(&self) -> usize {
        self.target_positions().len() - self.matched_positions.len()
    }

    pub fn is_target_position(&self, x: u8, y: u8) -> bool {
        self.target_positions().iter().any(|s| s.x == x && s.y == y)
    }

    pub fn is_matched_position(&self, x: u8, y: u8) -> bool {
        self.matched_positions.iter().any(|p| p.x == x && p.y == y)
    }

    /// Put a letter in play at an explicit position (tests and tools).
    ///
    /// Replaces any current active letter.
    pub fn set_active_letter(&mut self, letter: char, position: Position) -> ActiveLetter {
        let active = ActiveLetter {
            id: self.take_letter_id(),
            letter,
            position,
        };
        self.active_letter = Some(active);
        active
    }

    fn take_letter_id(&mut self) -> u32 {
        let id = self.next_letter_id;
        self.next_letter_id = self.next_letter_id.wrapping_add(1);
        id
    }

    /// Spawn a random letter at row 0.
    ///
    /// Returns false (state untouched) while a letter is falling or the word
    /// is complete.
    pub fn spawn_letter(&mut self, rng: &mut impl RandomSource) -> bool {
        if self.active_letter.is_some() || self.is_word_completed {
            return false;
        }

        let x = rng.next_below(BOARD_WIDTH as u32) as u8;
        let letter = rng.pick(&ALPHABET).copied().unwrap_or('A');
        self.set_active_letter(letter, Position::new(x, 0));
        true
    }

    /// Steer the active letter one cell, clamped to the steerable area.
    ///
    /// Returns false when there is no active letter.
    pub fn move_letter(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active_letter.as_mut() else {
            return false;
        };
        active.position = active.position.step(direction);
        true
    }

    /// The unfilled target slot that `letter` at (`x`, `y`) would fill
    fn open_slot(&self, letter: char, x: u8, y: u8) -> Option<TargetSlot> {
        self.target_positions().into_iter().find(|slot| {
            slot.letter == letter
                && slot.x == x
                && slot.y == y
                && !self.placed_letters.iter().any(|placed| {
                    placed.letter == slot.letter && placed.position == slot.position()
                })
        })
    }

    /// One fall tick of the active letter.
    ///
    /// Checks, in order: burn row, book below, fire below, target slot match,
    /// bottom reached. Book and fire are tested against the cell the letter
    /// occupies now ("one row above" them), so the letter never visually
    /// passes through either.
    pub fn update_letter_position(&mut self) -> LetterEvent {
        let Some(active) = self.active_letter else {
            return LetterEvent::None;
        };

        let ActiveLetter {
            letter, position, ..
        } = active;
        let new_y = position.y.saturating_add(1);

        if new_y == BURN_ROW {
            self.active_letter = None;
            self.burned_letters.push(letter);
            return LetterEvent::Burned(letter);
        }

        if is_directly_above(position, self.book_position) {
            self.active_letter = None;
            self.collected_letters.push(letter);
            return LetterEvent::Collected(letter);
        }

        if is_directly_above(position, self.fire_position) {
            self.active_letter = None;
            self.burned_letters.push(letter);
            return LetterEvent::Burned(letter);
        }

        if let Some(slot) = self.open_slot(letter, position.x, new_y) {
            self.active_letter = None;
            self.placed_letters.push(PlacedLetter {
                letter,
                position: slot.position(),
            });
            self.matched_positions.push(slot.position());

            // Letters past the last slot never get one; the word ends with its slots.
            if self.matched_positions.len() == self.current_word.len().min(MAX_WORD_LEN) {
                self.is_word_completed = true;
                return LetterEvent::Completed(letter);
            }
            return LetterEvent::Matched(letter);
        }

        if new_y >= BURN_ROW {
            self.active_letter = None;
            return LetterEvent::Landed(letter);
        }

        self.active_letter = Some(ActiveLetter {
            position: Position::new(position.x, new_y),
            ..active
        });
        LetterEvent::None
    }

    /// Project the state onto a display grid.
    ///
    /// Layers: book, fire, active letter, placed letters, unmatched target
    /// letters. Overlapping cells keep the last glyph written.
    pub fn board(&self) -> Board {
        let mut board = Board::new();
        self.write_board(&mut board);
        board
    }

    /// Same as [`GameState::board`], reusing `board`
    pub fn write_board(&self, board: &mut Board) {
        board.clear();
        board.put(self.book_position, Glyph::Book);
        board.put(self.fire_position, Glyph::Fire);

        if let Some(active) = self.active_letter {
            board.put(active.position, Glyph::Letter(active.letter));
        }

        for placed in &self.placed_letters {
            board.put(placed.position, Glyph::Letter(placed.letter));
        }

        for slot in self.target_positions() {
            if !self.is_matched_position(slot.x, slot.y) {
                board.put(slot.position(), Glyph::Target(slot.letter));
            }
        }
    }

    /// Next round: new word, book and fire; the letter logs are kept.
    pub fn start_new_round(&mut self, rng: &mut impl RandomSource) {
        let word = random_word(rng);
        let book = random_book_position(rng, word.text);
        let fire = random_fire_position(rng, word.text, book);

        self.active_letter = None;
        self.placed_letters.clear();
        self.matched_positions.clear();
        self.is_word_completed = false;
        self.book_position = book;
        self.fire_position = fire;
        self.current_word = word;
    }
}

fn is_directly_above(letter: Position, object: Position) -> bool {
    letter.x == object.x && letter.y.checked_add(1) == Some(object.y)
}
