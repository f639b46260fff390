//! Terminal front end.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer of styled cells, and the renderer flushes only what changed.
//! No widget library is involved.
//!
//! - [`GameView`]: pure snapshot to framebuffer mapping (testable without a tty)
//! - [`TerminalRenderer`]: raw mode, alternate screen and diff output
//! - [`ToastQueue`]: the [`Notifier`](crate::engine::Notifier) behind the
//!   on-screen messages

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod toast;

pub use wordris_core as core;
pub use wordris_engine as engine;
pub use wordris_types as types;

pub use fb::{is_narrow, narrow_text, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use toast::{Toast, ToastQueue, TOAST_CAPACITY, TOAST_DURATION_MS};
