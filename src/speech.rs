//! Text-to-speech through an external program.

use std::process::{Command, Stdio};
use std::thread;

use log::{trace, warn};

use crate::config::SpeechCommand;
use crate::engine::Speaker;

/// Runs `program args... <text>` for every utterance.
///
/// The child is detached from the game loop; a short-lived thread waits on
/// it so no zombie is left behind. Its output is discarded so it cannot
/// draw over the game.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    command: SpeechCommand,
}

impl CommandSpeaker {
    pub fn new(command: SpeechCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &SpeechCommand {
        &self.command
    }

    fn build(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) {
        trace!("speaking {:?} with {}", text, self.command.program);
        match self.build(text).spawn() {
            Ok(mut child) => {
                let spawned = thread::Builder::new()
                    .name("wordris-speech".to_string())
                    .spawn(move || {
                        if let Err(e) = child.wait() {
                            warn!("speech process wait failed: {}", e);
                        }
                    });
                if let Err(e) = spawned {
                    warn!("could not start speech reaper thread: {}", e);
                }
            }
            Err(e) => warn!("speech command {:?} failed: {}", self.command.program, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_goes_last() {
        let speaker = CommandSpeaker::new(SpeechCommand::parse("espeak -v sv").unwrap());
        let cmd = speaker.build("Grattis!");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(cmd.get_program(), "espeak");
        assert_eq!(args, vec!["-v", "sv", "Grattis!"]);
    }

    #[test]
    fn missing_program_is_not_fatal() {
        let mut speaker =
            CommandSpeaker::new(SpeechCommand::parse("wordris-no-such-speech-program").unwrap());
        speaker.speak("Bokstaven A brann upp!");
    }
}
