//! Game controller - drives the model with timers and talks to the player.

use log::debug;

use crate::core::{Board, GameSnapshot, GameState, RandomSource};
use crate::messages::{letter_callout, message_for};
use crate::timer::{DelayTimer, IntervalTimer};
use crate::types::{
    Command, Direction, LetterEvent, LetterLog, SpeedLevel, FAST_FALL_INTERVAL_MS,
    ROUND_RESTART_DELAY_MS,
};

/// Receives player-facing notifications (toasts in the terminal front end).
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str);
}

/// Reads text aloud.
pub trait Speaker {
    fn speak(&mut self, text: &str);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, title: &str, description: &str) {
        (**self).notify(title, description)
    }
}

impl<T: Speaker + ?Sized> Speaker for &mut T {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, title: &str, description: &str) {
        (**self).notify(title, description)
    }
}

impl<T: Speaker + ?Sized> Speaker for Box<T> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

/// Speaker that says nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str) {}
}

/// Owns the game state and everything that moves it forward.
///
/// Time is pushed in from outside through [`Controller::advance`]; the
/// controller never reads a clock.
pub struct Controller<R, N, S> {
    state: GameState,
    rng: R,
    notifier: N,
    speaker: S,
    speed: SpeedLevel,
    sound_enabled: bool,
    fast_falling: bool,
    fall_timer: IntervalTimer,
    spawn_timer: IntervalTimer,
    /// Armed after a completed word
    round_delay: Option<DelayTimer>,
}

impl<R: RandomSource, N: Notifier, S: Speaker> Controller<R, N, S> {
    /// New game at the default speed with sound off
    pub fn new(mut rng: R, notifier: N, speaker: S) -> Self {
        let state = GameState::new(&mut rng);
        let speed = SpeedLevel::default();
        let timings = speed.timings();
        debug!(
            "new game word={} book={:?} fire={:?}",
            state.current_word().text,
            state.book_position(),
            state.fire_position()
        );
        Self {
            state,
            rng,
            notifier,
            speaker,
            speed,
            sound_enabled: false,
            fast_falling: false,
            fall_timer: IntervalTimer::new(timings.fall_interval_ms),
            spawn_timer: IntervalTimer::new(timings.spawn_interval_ms),
            round_delay: None,
        }
    }

    pub fn with_speed(mut self, level: SpeedLevel) -> Self {
        self.set_speed(level);
        self
    }

    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Advance time by `elapsed_ms` and run every timer firing inside it.
    ///
    /// Firings are processed in time order; simultaneous firings run fall,
    /// then spawn, then the new-round delay. Returns the letter events that
    /// happened, in order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<LetterEvent> {
        let mut events = Vec::new();
        let mut left = elapsed_ms;

        loop {
            let mut step = self.fall_timer.remaining_ms().min(self.spawn_timer.remaining_ms());
            if let Some(delay) = &self.round_delay {
                step = step.min(delay.remaining_ms());
            }
            let step = step.min(left);

            let fall = self.fall_timer.advance(step);
            let spawn = self.spawn_timer.advance(step);
            let new_round = match self.round_delay.as_mut() {
                Some(delay) => delay.advance(step),
                None => false,
            };
            left -= step;

            if fall {
                let event = self.state.update_letter_position();
                if event != LetterEvent::None {
                    self.handle_event(event);
                    events.push(event);
                }
            }
            if spawn && self.state.spawn_letter(&mut self.rng) {
                if let Some(active) = self.state.active_letter() {
                    debug!("spawn letter={} x={}", active.letter, active.position.x);
                }
            }
            if new_round {
                self.round_delay = None;
                self.state.start_new_round(&mut self.rng);
                debug!(
                    "new round word={} book={:?} fire={:?}",
                    self.state.current_word().text,
                    self.state.book_position(),
                    self.state.fire_position()
                );
            }

            if left == 0 && !fall && !spawn && !new_round {
                break;
            }
        }

        events
    }

    fn handle_event(&mut self, event: LetterEvent) {
        debug!("letter event {} {:?}", event.as_str(), event.letter());

        if let Some(message) = message_for(event) {
            self.notifier.notify(message.title, &message.description);
            if self.sound_enabled {
                self.speaker.speak(&message.description);
            }
        }

        if let LetterEvent::Completed(_) = event {
            self.round_delay = Some(DelayTimer::new(ROUND_RESTART_DELAY_MS));
        }
    }

    fn fall_interval_ms(&self) -> u32 {
        if self.fast_falling {
            FAST_FALL_INTERVAL_MS
        } else {
            self.speed.timings().fall_interval_ms
        }
    }

    fn restart_timers(&mut self) {
        self.fall_timer.restart(self.fall_interval_ms());
        self.spawn_timer
            .restart(self.speed.timings().spawn_interval_ms);
    }

    /// Steer the falling letter. Returns false when nothing is falling.
    pub fn move_letter(&mut self, direction: Direction) -> bool {
        self.state.move_letter(direction)
    }

    /// Flip the sound flag and return the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        debug!("sound enabled={}", self.sound_enabled);
        self.sound_enabled
    }

    /// Switch difficulty; both cadences restart from zero.
    pub fn set_speed(&mut self, level: SpeedLevel) {
        if level == self.speed {
            return;
        }
        self.speed = level;
        self.restart_timers();
        debug!("speed set to {}", level.as_str());
    }

    pub fn start_fast_fall(&mut self) {
        if self.fast_falling {
            return;
        }
        self.fast_falling = true;
        self.fall_timer.restart(FAST_FALL_INTERVAL_MS);
        debug!("fast fall on");
    }

    pub fn stop_fast_fall(&mut self) {
        if !self.fast_falling {
            return;
        }
        self.fast_falling = false;
        self.fall_timer.restart(self.fall_interval_ms());
        debug!("fast fall off");
    }

    /// Say the letter at `index` of a log. Returns false when sound is off or
    /// there is no such letter.
    pub fn speak_letter(&mut self, kind: LetterLog, index: usize) -> bool {
        if !self.sound_enabled {
            return false;
        }
        let letters = match kind {
            LetterLog::Collected => self.state.collected_letters(),
            LetterLog::Burned => self.state.burned_letters(),
        };
        let Some(&letter) = letters.get(index) else {
            return false;
        };
        self.speaker.speak(&letter_callout(kind, letter));
        debug!("speak {} letter={}", kind.as_str(), letter);
        true
    }

    /// [`Controller::speak_letter`] for the newest letter of a log
    pub fn speak_latest(&mut self, kind: LetterLog) -> bool {
        let len = match kind {
            LetterLog::Collected => self.state.collected_letters().len(),
            LetterLog::Burned => self.state.burned_letters().len(),
        };
        match len.checked_sub(1) {
            Some(index) => self.speak_letter(kind, index),
            None => false,
        }
    }

    /// Throw the current game away and start over; letter logs are cleared.
    pub fn restart_game(&mut self) {
        self.state = GameState::new(&mut self.rng);
        self.round_delay = None;
        self.fast_falling = false;
        self.restart_timers();
        debug!("restart word={}", self.state.current_word().text);
    }

    /// Run a command. Returns false for commands the controller does not own
    /// (help toggling belongs to the view).
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => {
                self.move_letter(direction);
            }
            Command::StartFastFall => self.start_fast_fall(),
            Command::StopFastFall => self.stop_fast_fall(),
            Command::ToggleSound => {
                self.toggle_sound();
            }
            Command::SetSpeed(level) => self.set_speed(level),
            Command::Restart => self.restart_game(),
            Command::SpeakLatest(log) => {
                self.speak_latest(log);
            }
            Command::ToggleHelp => return false,
        }
        true
    }

    pub fn board(&self) -> Board {
        self.state.board()
    }

    pub fn collected_letters(&self) -> &[char] {
        self.state.collected_letters()
    }

    pub fn burned_letters(&self) -> &[char] {
        self.state.burned_letters()
    }

    pub fn is_word_completed(&self) -> bool {
        self.state.is_word_completed()
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn is_fast_falling(&self) -> bool {
        self.fast_falling
    }

    /// True while a completed word waits for the next round
    pub fn round_pending(&self) -> bool {
        self.round_delay.is_some()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable model access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::from_state(&self.state);
        self.write_settings(&mut out);
        out
    }

    /// Refresh `out` in place, reusing its allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.update_from(&self.state);
        self.write_settings(out);
    }

    fn write_settings(&self, out: &mut GameSnapshot) {
        out.speed = self.speed;
        out.sound_enabled = self.sound_enabled;
        out.fast_falling = self.fast_falling;
    }
}
