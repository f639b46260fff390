use wordris::core::{GameSnapshot, GameState, Word};
use wordris::engine::message_for;
use wordris::term::{is_narrow, AnchorY, FrameBuffer, GameView, Rgb, ToastQueue, Viewport};
use wordris::types::{LetterEvent, Position, WordCategory, TARGET_ROW};

// 60x24 anchored at the top: start_x = (60 - 30) / 2 = 15, start_y = 0.
// Board cell (x, y) starts at terminal column 16 + 2x, row 1 + y.
const VP: Viewport = Viewport {
    width: 60,
    height: 24,
};

fn bamse() -> GameState {
    GameState::with_word(
        Word::new("BAMSE", WordCategory::FamousFigures),
        Position::new(0, 4),
        Position::new(6, 3),
    )
}

fn top_view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

fn render(view: &GameView, snap: &GameSnapshot, toasts: &ToastQueue) -> FrameBuffer {
    view.render(snap, toasts, VP)
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).unwrap().ch
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::from_state(&bamse());
    let fb = render(&top_view(), &snap, &ToastQueue::new());

    // 7 cells * 2 columns + border = 16 wide, 12 rows + border = 14 tall
    assert_eq!(ch(&fb, 15, 0), '┌');
    assert_eq!(ch(&fb, 30, 0), '┐');
    assert_eq!(ch(&fb, 15, 13), '└');
    assert_eq!(ch(&fb, 30, 13), '┘');
}

#[test]
fn term_view_draws_book_fire_and_ghost_targets() {
    let snap = GameSnapshot::from_state(&bamse());
    let fb = render(&top_view(), &snap, &ToastQueue::new());

    // Book at (0,4)
    assert_eq!(ch(&fb, 16, 5), '[');
    assert_eq!(ch(&fb, 17, 5), ']');
    // Fire at (6,3)
    assert_eq!(ch(&fb, 28, 4), '^');
    // Ghost B at (1, TARGET_ROW)
    let ghost = fb.get(18, 1 + TARGET_ROW as u16).unwrap();
    assert_eq!(ghost.ch, 'B');
    assert!(ghost.style.dim);
    // Empty cell
    assert_eq!(ch(&fb, 22, 1), '·');
}

#[test]
fn term_view_draws_burn_row_as_flames() {
    let snap = GameSnapshot::from_state(&bamse());
    let fb = render(&top_view(), &snap, &ToastQueue::new());

    for x in 0..7u16 {
        let cell = fb.get(16 + 2 * x, 12).unwrap();
        assert_eq!(cell.ch, '^');
        assert_eq!(cell.style.bg, Rgb::new(70, 20, 10));
    }
}

#[test]
fn term_view_highlights_matched_and_active_letters() {
    let mut state = bamse();
    state.set_active_letter('B', Position::new(1, TARGET_ROW - 1));
    state.update_letter_position();
    state.set_active_letter('Q', Position::new(3, 2));

    let snap = GameSnapshot::from_state(&state);
    let fb = render(&top_view(), &snap, &ToastQueue::new());

    let matched = fb.get(18, 1 + TARGET_ROW as u16).unwrap();
    assert_eq!(matched.ch, 'B');
    assert!(matched.style.bold);
    assert!(!matched.style.dim);

    let active = fb.get(22, 3).unwrap();
    assert_eq!(active.ch, 'Q');
    assert!(active.style.bold);
    assert_ne!(active.style.bg, matched.style.bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameSnapshot::from_state(&bamse());
    snap.collected_letters = vec!['K', 'Å'];
    snap.burned_letters = vec!['Z'];

    let fb = render(&top_view(), &snap, &ToastQueue::new());

    assert!(fb.contains_text("Bilda ordet:"));
    assert!(fb.contains_text("Kända figurer"));
    assert!(fb.contains_text("Samlade bokstäver"));
    assert!(fb.contains_text("K Å"));
    assert!(fb.contains_text("Brända bokstäver"));
    assert!(fb.contains_text("Hastighet: Normal"));
    assert!(fb.contains_text("Ljud av"));
    assert!(!fb.contains_text("Hur man spelar"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = GameSnapshot::from_state(&bamse());
    let fb = top_view().render(&snap, &ToastQueue::new(), Viewport::new(20, 16));
    assert!(!fb.contains_text("Bilda"));
}

#[test]
fn term_view_shows_help_when_toggled() {
    let snap = GameSnapshot::from_state(&bamse());
    let mut view = top_view();
    view.toggle_help();
    assert!(view.help_visible());

    let fb = render(&view, &snap, &ToastQueue::new());
    assert!(fb.contains_text("Hur man spelar"));
    assert!(fb.contains_text("Se upp för elden!"));
}

#[test]
fn term_view_shows_overlay_and_toasts() {
    let mut snap = GameSnapshot::from_state(&bamse());
    snap.word_completed = true;
    let mut toasts = ToastQueue::new();
    toasts.push("Grattis! 🎉", "Du klarade ordet! Nytt ord kommer...");

    let fb = render(&top_view(), &snap, &toasts);
    assert!(fb.contains_text("GRATTIS!"));
    // Toasts sit directly under the board frame.
    assert!(fb.row_text(14).contains("Du klarade ordet!"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::from_state(&bamse());
    let fb = GameView::default().render(&snap, &ToastQueue::new(), Viewport::new(60, 30));

    // start_y = (30 - (14 + 3 toast rows)) / 2 = 6
    assert_eq!(ch(&fb, 15, 6), '┌');
}

#[test]
fn term_view_toast_row_is_one_column_per_cell() {
    let snap = GameSnapshot::from_state(&bamse());
    let mut toasts = ToastQueue::new();
    let message = message_for(LetterEvent::Collected('K')).unwrap();
    toasts.push(message.title, &message.description);

    let fb = render(&top_view(), &snap, &toasts);
    let row = fb.row_text(14);
    assert_eq!(row.chars().count(), VP.width as usize);
    assert!(row.chars().all(is_narrow));
    assert!(row.contains("Ny bokstav! Du samlade bokstaven K!"));
}

#[test]
fn term_view_marks_fast_fall_with_narrow_arrows() {
    let mut snap = GameSnapshot::from_state(&bamse());
    snap.fast_falling = true;
    let fb = render(&top_view(), &snap, &ToastQueue::new());

    assert!(fb.contains_text("Hastighet: Normal ↓↓"));
    for y in 0..VP.height {
        assert!(fb.row_text(y).chars().all(is_narrow));
    }
}
