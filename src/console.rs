use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::error::GameError;
use crate::visualize::GameEvent;

/// Word that abandons the game at the card prompt.
pub const CANCEL_TOKEN: &str = "exit";

/// Boundary between the game and whoever is sitting at the keyboard.
pub trait Console {
    /// Reports something that happened in the game.
    fn emit(&mut self, event: &GameEvent);

    /// Asks until the answer is `yes` or `no`. Returns `true` for yes.
    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, GameError>;

    /// Asks for a card number in `1..=hand_size` until a valid one is given.
    /// Fails with [`GameError::Cancelled`] when the player quits.
    fn prompt_card_index(&mut self, hand_size: usize) -> Result<usize, GameError>;
}

/// Line-oriented console over any reader/writer pair.
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl TextConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, line: &str) {
        let written = writeln!(self.output, "{line}");
        if let Err(err) = written.and_then(|_| self.output.flush()) {
            warn!(%err, "failed to write to console");
        }
    }

    /// Next line without its terminator. End of input counts as quitting.
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn emit(&mut self, event: &GameEvent) {
        if matches!(event, GameEvent::Table { .. }) {
            self.say("");
        }
        self.say(&event.to_string());
    }

    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, GameError> {
        loop {
            self.say(question);
            let answer = self.read_line()?;
            if answer.eq_ignore_ascii_case("yes") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("no") {
                return Ok(false);
            }
        }
    }

    fn prompt_card_index(&mut self, hand_size: usize) -> Result<usize, GameError> {
        loop {
            self.say(&format!("Choose a card to play (1-{hand_size}):"));
            let answer = self.read_line()?;
            if answer == CANCEL_TOKEN {
                return Err(GameError::Cancelled);
            }
            let Ok(choice) = answer.parse::<usize>() else {
                continue;
            };
            if (1..=hand_size).contains(&choice) {
                return Ok(choice);
            }
        }
    }
}
