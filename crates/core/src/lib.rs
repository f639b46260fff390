//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state of the falling-letter word
//! game. It has **no dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: every random decision goes through an injected [`RandomSource`]
//! - **Testable**: each transition is a method with an explicit outcome
//! - **Portable**: the terminal front end and headless tests drive the same code
//!
//! # Module Structure
//!
//! - [`board`]: 7x12 display grid, rebuilt from the state on demand
//! - [`game_state`]: round state, falling letter, collision resolution
//! - [`rng`]: random source trait, seeded LCG and scripted sequences
//! - [`snapshot`]: read-only view handed to renderers
//! - [`words`]: categorized word bank
//!
//! # Game Rules
//!
//! - A target word is laid out, centered, on row 8; its letters show ghosted.
//! - One letter at a time spawns at row 0 and falls one row per tick.
//! - The player steers it left/right/up/down; it cannot be steered into row 11.
//! - Landing on the matching letter of the word fills that slot (once).
//! - Falling onto the book collects the letter; onto the fire burns it; reaching
//!   row 11 burns it too.
//! - Filling every slot completes the word; a new round draws a new word but
//!   keeps the collected and burned letters.
//!
//! # Example
//!
//! ```
//! use wordris_core::{GameState, Word};
//! use wordris_core::types::{Direction, LetterEvent, Position, WordCategory, TARGET_ROW};
//!
//! let mut game = GameState::with_word(
//!     Word::new("BAMSE", WordCategory::FamousFigures),
//!     Position::new(0, 4),
//!     Position::new(6, 3),
//! );
//!
//! // Drop a B just above its slot, nudge it, let it fall.
//! game.set_active_letter('B', Position::new(2, TARGET_ROW - 1));
//! game.move_letter(Direction::Left);
//! assert_eq!(game.update_letter_position(), LetterEvent::Matched('B'));
//! assert_eq!(game.remaining_slots(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod words;

pub use wordris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{
    random_book_position, random_fire_position, target_positions, ActiveLetter, GameState,
    PlacedLetter, TargetSlot,
};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::GameSnapshot;
pub use words::{all_words, random_word, Word, WORD_BANK};
