//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the model, the controller, the input layer and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 12 rows (indexed 0-11)
//! - **Target row**: 8, where the current word is laid out
//! - **Burn row**: 11, the bottom row; a letter reaching it burns
//! - **Spawn row**: 0, at a random column
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop input/poll granularity |
//! | `FAST_FALL_INTERVAL_MS` | 100 | Fall cadence while fast-fall is held |
//! | `ROUND_RESTART_DELAY_MS` | 2000 | Time the completed word stays visible |
//!
//! # Speed Presets
//!
//! | Level | Fall interval | Spawn interval |
//! |-------|---------------|----------------|
//! | Easy (Lätt) | 700ms | 4000ms |
//! | Normal | 500ms | 3000ms |
//! | Hard (Svår) | 300ms | 2000ms |
//!
//! # Examples
//!
//! ```
//! use wordris_types::{Direction, Position, SpeedLevel, BOARD_WIDTH, TARGET_ROW};
//!
//! let pos = Position::new(3, 0);
//! assert_eq!(pos.step(Direction::Left), Position::new(2, 0));
//!
//! let speed = SpeedLevel::from_str("svår").unwrap();
//! assert_eq!(speed, SpeedLevel::Hard);
//! assert_eq!(speed.timings().fall_interval_ms, 300);
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(TARGET_ROW, 8);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (12 rows)
pub const BOARD_HEIGHT: u8 = 12;

/// Row on which the target word is laid out
pub const TARGET_ROW: u8 = 8;

/// Bottom row; a letter that would fall into it burns
pub const BURN_ROW: u8 = BOARD_HEIGHT - 1;

/// Lowest row the player can steer a letter into
pub const LAST_STEERABLE_ROW: u8 = BOARD_HEIGHT - 2;

/// Book row range (inclusive), kept clear of the target row
pub const BOOK_MIN_ROW: u8 = 3;
pub const BOOK_MAX_ROW: u8 = 6;

/// Fire row range (inclusive), kept clear of the target row
pub const FIRE_MIN_ROW: u8 = 2;
pub const FIRE_MAX_ROW: u8 = 6;

/// Longest word that fits on the target row
pub const MAX_WORD_LEN: usize = BOARD_WIDTH as usize;

/// Letters that can spawn (Swedish alphabet)
pub const ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Å', 'Ä', 'Ö',
];

/// Main loop granularity in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval while fast-fall is held
pub const FAST_FALL_INTERVAL_MS: u32 = 100;

/// Delay between completing a word and the next round
pub const ROUND_RESTART_DELAY_MS: u32 = 2000;

/// Grid cell coordinates, (0, 0) is top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Move one cell in `direction`, clamped to the steerable area.
    ///
    /// Columns clamp to `[0, BOARD_WIDTH)`, rows to `[0, LAST_STEERABLE_ROW]`.
    ///
    /// ```
    /// use wordris_types::{Direction, Position, LAST_STEERABLE_ROW};
    ///
    /// assert_eq!(Position::new(0, 4).step(Direction::Left), Position::new(0, 4));
    /// let low = Position::new(2, LAST_STEERABLE_ROW);
    /// assert_eq!(low.step(Direction::Down), low);
    /// ```
    pub fn step(self, direction: Direction) -> Self {
        let (x, y) = (self.x, self.y);
        match direction {
            Direction::Left => Self::new(x.saturating_sub(1), y),
            Direction::Right => Self::new(x.saturating_add(1).min(BOARD_WIDTH - 1), y),
            Direction::Up => Self::new(x, y.saturating_sub(1)),
            Direction::Down => Self::new(x, y.saturating_add(1).min(LAST_STEERABLE_ROW)),
        }
    }

    pub fn in_bounds(self) -> bool {
        self.x < BOARD_WIDTH && self.y < BOARD_HEIGHT
    }
}

/// Steering directions for the active letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Fall and spawn cadence for one speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeedTimings {
    pub fall_interval_ms: u32,
    pub spawn_interval_ms: u32,
}

/// The three difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedLevel {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl SpeedLevel {
    pub const ALL: [SpeedLevel; 3] = [SpeedLevel::Easy, SpeedLevel::Normal, SpeedLevel::Hard];

    pub fn timings(&self) -> SpeedTimings {
        match self {
            SpeedLevel::Easy => SpeedTimings {
                fall_interval_ms: 700,
                spawn_interval_ms: 4000,
            },
            SpeedLevel::Normal => SpeedTimings {
                fall_interval_ms: 500,
                spawn_interval_ms: 3000,
            },
            SpeedLevel::Hard => SpeedTimings {
                fall_interval_ms: 300,
                spawn_interval_ms: 2000,
            },
        }
    }

    /// Parse a level name, English or Swedish (case-insensitive)
    ///
    /// ```
    /// use wordris_types::SpeedLevel;
    ///
    /// assert_eq!(SpeedLevel::from_str("EASY"), Some(SpeedLevel::Easy));
    /// assert_eq!(SpeedLevel::from_str("lätt"), Some(SpeedLevel::Easy));
    /// assert_eq!(SpeedLevel::from_str("svar"), Some(SpeedLevel::Hard));
    /// assert_eq!(SpeedLevel::from_str("turbo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "latt" | "lätt" => Some(SpeedLevel::Easy),
            "normal" => Some(SpeedLevel::Normal),
            "hard" | "svar" | "svår" => Some(SpeedLevel::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedLevel::Easy => "easy",
            SpeedLevel::Normal => "normal",
            SpeedLevel::Hard => "hard",
        }
    }

    /// Player-facing label
    pub fn label(&self) -> &'static str {
        match self {
            SpeedLevel::Easy => "Lätt",
            SpeedLevel::Normal => "Normal",
            SpeedLevel::Hard => "Svår",
        }
    }
}

/// Category tag of a word in the word bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    FamousFigures,
    Cities,
    Animals,
    Food,
    Christmas,
}

impl WordCategory {
    pub const ALL: [WordCategory; 5] = [
        WordCategory::FamousFigures,
        WordCategory::Cities,
        WordCategory::Animals,
        WordCategory::Food,
        WordCategory::Christmas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WordCategory::FamousFigures => "Kända figurer",
            WordCategory::Cities => "Städer",
            WordCategory::Animals => "Djur",
            WordCategory::Food => "Mat",
            WordCategory::Christmas => "Julord",
        }
    }
}

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Book,
    Fire,
    /// Active or placed letter
    Letter(char),
    /// Unmatched letter of the target word (shown ghosted)
    Target(char),
}

impl Glyph {
    pub fn as_char(&self) -> char {
        match self {
            Glyph::Book => '📚',
            Glyph::Fire => '🔥',
            Glyph::Letter(c) | Glyph::Target(c) => *c,
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Glyph)`: Cell showing the glyph
pub type Cell = Option<Glyph>;

/// Outcome of one fall tick of the active letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterEvent {
    /// Letter kept falling (or there was no letter)
    None,
    /// Letter dropped into the book
    Collected(char),
    /// Letter hit the fire or the burn row
    Burned(char),
    /// Letter filled a target slot
    Matched(char),
    /// Letter filled the last target slot
    Completed(char),
    /// Letter reached the bottom without a match
    Landed(char),
}

impl LetterEvent {
    pub fn letter(&self) -> Option<char> {
        match *self {
            LetterEvent::None => None,
            LetterEvent::Collected(c)
            | LetterEvent::Burned(c)
            | LetterEvent::Matched(c)
            | LetterEvent::Completed(c)
            | LetterEvent::Landed(c) => Some(c),
        }
    }

    /// True when the active letter no longer exists after this event
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LetterEvent::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterEvent::None => "none",
            LetterEvent::Collected(_) => "collected",
            LetterEvent::Burned(_) => "burned",
            LetterEvent::Matched(_) => "matched",
            LetterEvent::Completed(_) => "completed",
            LetterEvent::Landed(_) => "landed",
        }
    }
}

/// The two per-session letter logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterLog {
    /// Letters dropped into the book
    Collected,
    /// Letters lost to the fire or the burn row
    Burned,
}

impl LetterLog {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterLog::Collected => "collected",
            LetterLog::Burned => "burned",
        }
    }
}

/// Player commands, produced by input mapping and consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    StartFastFall,
    StopFastFall,
    ToggleSound,
    SetSpeed(SpeedLevel),
    Restart,
    /// Read the newest letter of a log aloud
    SpeakLatest(LetterLog),
    /// Front-end only: show or hide the instructions panel
    ToggleHelp,
}
