//! Player-facing notification texts.

use crate::types::{LetterEvent, LetterLog};

/// Title and description shown (and spoken) for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: &'static str,
    pub description: String,
}

/// Notification for `event`, `None` for events the player is not told about
pub fn message_for(event: LetterEvent) -> Option<Message> {
    match event {
        LetterEvent::Collected(c) => Some(Message {
            title: "Ny bokstav! 📚",
            description: format!("Du samlade bokstaven {}!", c),
        }),
        LetterEvent::Burned(c) => Some(Message {
            title: "Bokstav bränd! 🔥",
            description: format!("Bokstaven {} brann upp!", c),
        }),
        LetterEvent::Completed(_) => Some(Message {
            title: "Grattis! 🎉",
            description: "Du klarade ordet! Nytt ord kommer...".to_string(),
        }),
        LetterEvent::None | LetterEvent::Matched(_) | LetterEvent::Landed(_) => None,
    }
}

/// What is said when the player asks to hear a logged letter
pub fn letter_callout(log: LetterLog, letter: char) -> String {
    match log {
        LetterLog::Collected => format!("Sparad bokstav {}", letter),
        LetterLog::Burned => format!("Bränd bokstav {}", letter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_and_burned_name_the_letter() {
        let m = message_for(LetterEvent::Collected('Å')).unwrap();
        assert_eq!(m.description, "Du samlade bokstaven Å!");
        let m = message_for(LetterEvent::Burned('K')).unwrap();
        assert_eq!(m.title, "Bokstav bränd! 🔥");
        assert_eq!(m.description, "Bokstaven K brann upp!");
    }

    #[test]
    fn callouts_name_log_and_letter() {
        assert_eq!(letter_callout(LetterLog::Collected, 'Ö'), "Sparad bokstav Ö");
        assert_eq!(letter_callout(LetterLog::Burned, 'X'), "Bränd bokstav X");
    }

    #[test]
    fn quiet_events_have_no_message() {
        assert!(message_for(LetterEvent::None).is_none());
        assert!(message_for(LetterEvent::Matched('A')).is_none());
        assert!(message_for(LetterEvent::Landed('A')).is_none());
        assert!(message_for(LetterEvent::Completed('E')).is_some());
    }
}
