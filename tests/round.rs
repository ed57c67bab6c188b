use std::collections::VecDeque;
use std::io::Cursor;

use rand::rngs::mock::StepRng;

use indigo::card::full_deck;
use indigo::{
    ComputerBot, Console, GameBuilder, GameError, GameEvent, HumanBot, RoundOutcome, ScoreBoard,
    Seat, TextConsole, play_round,
};

type ScriptConsole = TextConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn script(answer: &str, choices: &[&str]) -> ScriptConsole {
    let mut input = format!("{answer}\n");
    for choice in choices {
        input.push_str(choice);
        input.push('\n');
    }
    TextConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Unshuffled deck, human always takes the first card, computer always the
/// first card of its pool.
fn play_scripted(
    console: &mut dyn Console,
    reveal: bool,
) -> Result<RoundOutcome, GameError> {
    let builder = GameBuilder::new().with_deck(full_deck());
    let mut human = HumanBot::new();
    let mut computer = ComputerBot::new(StepRng::new(0, 0)).with_revealed_hand(reveal);
    play_round(builder, &mut human, &mut computer, console)
}

fn transcript(console: ScriptConsole) -> String {
    let (_, output) = console.into_parts();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn human_first_full_game() -> Result<(), GameError> {
    let mut console = script("maybe\nyes", &["1"; 24]);
    let outcome = play_scripted(&mut console, false)?;
    assert_eq!(
        outcome,
        RoundOutcome::Completed(ScoreBoard {
            points: [19, 4],
            won_cards: [46, 6],
        })
    );
    let output = transcript(console);
    assert!(output.starts_with(
        "Indigo Card Game\n\
         Play first?\n\
         Play first?\n\
         Initial cards on the table: A♦ 2♦ 3♦ 4♦\n\
         \n\
         4 cards on the table, and the top card is 4♦\n\
         Cards in hand: 1)5♦ 2)6♦ 3)7♦ 4)8♦ 5)9♦ 6)10♦\n\
         Choose a card to play (1-6):\n\
         Player wins cards\n\
         Score: Player 1 - Computer 0\n\
         Cards: Player 5 - Computer 0\n\
         \n\
         No cards on the table\n\
         Computer plays J♦\n"
    ));
    assert!(output.ends_with(
        "Computer plays K♣\n\
         1 cards on the table, and the top card is K♣\n\
         Score: Player 19 - Computer 4\n\
         Cards: Player 46 - Computer 6\n\
         Game Over\n"
    ));
    Ok(())
}

#[test]
fn computer_first_full_game() -> Result<(), GameError> {
    let mut console = script("no", &["1"; 24]);
    let outcome = play_scripted(&mut console, false)?;
    assert_eq!(
        outcome,
        RoundOutcome::Completed(ScoreBoard {
            points: [0, 23],
            won_cards: [0, 52],
        })
    );
    let output = transcript(console);
    assert!(output.contains("Computer plays 5♦\nComputer wins cards\n"));
    assert!(!output.contains("Player wins cards"));
    assert!(output.ends_with("Cards: Player 0 - Computer 52\nGame Over\n"));
    Ok(())
}

#[test]
fn invalid_card_choices_are_asked_again() -> Result<(), GameError> {
    let mut choices = vec!["seven", "0", "7"];
    choices.extend(["1"; 24]);
    let mut console = script("yes", &choices);
    let outcome = play_scripted(&mut console, false)?;
    assert!(matches!(outcome, RoundOutcome::Completed(_)));
    let output = transcript(console);
    assert!(output.contains(
        "Choose a card to play (1-6):\n\
         Choose a card to play (1-6):\n\
         Choose a card to play (1-6):\n\
         Choose a card to play (1-6):\n\
         Player wins cards\n"
    ));
    Ok(())
}

#[test]
fn exit_cancels_without_final_score() -> Result<(), GameError> {
    let mut console = script("yes", &["1", "exit"]);
    let outcome = play_scripted(&mut console, false)?;
    assert_eq!(outcome, RoundOutcome::Cancelled);
    let output = transcript(console);
    assert_eq!(output.matches("Score:").count(), 1);
    assert!(output.contains("Computer plays J♦\n"));
    assert!(output.ends_with("Choose a card to play (1-5):\nGame Over\n"));
    Ok(())
}

#[test]
fn end_of_input_cancels() -> Result<(), GameError> {
    let mut console = script("yes", &["1", "1"]);
    let outcome = play_scripted(&mut console, false)?;
    assert_eq!(outcome, RoundOutcome::Cancelled);
    assert!(transcript(console).ends_with("Game Over\n"));
    Ok(())
}

#[test]
fn revealed_computer_hand_is_printed_before_its_play() -> Result<(), GameError> {
    let mut console = script("yes", &["1", "exit"]);
    play_scripted(&mut console, true)?;
    let output = transcript(console);
    assert!(output.contains("J♦ Q♦ K♦ A♥ 2♥ 3♥\nComputer plays J♦\n"));
    Ok(())
}

/// Collects events and answers prompts from a fixed script.
#[derive(Default)]
struct RecordingConsole {
    events: Vec<GameEvent>,
    human_first: bool,
    choices: VecDeque<usize>,
}

impl Console for RecordingConsole {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn prompt_yes_no(&mut self, _question: &str) -> Result<bool, GameError> {
        Ok(self.human_first)
    }

    fn prompt_card_index(&mut self, hand_size: usize) -> Result<usize, GameError> {
        let choice = self.choices.pop_front().ok_or(GameError::Cancelled)?;
        assert!((1..=hand_size).contains(&choice));
        Ok(choice)
    }
}

#[test]
fn events_follow_the_game() -> Result<(), GameError> {
    let mut console = RecordingConsole {
        human_first: true,
        choices: std::iter::repeat(1).take(24).collect(),
        ..Default::default()
    };
    let outcome = play_scripted(&mut console, false)?;
    let RoundOutcome::Completed(board) = outcome else {
        panic!("game should complete");
    };

    let events = &console.events;
    assert_eq!(events[0], GameEvent::Banner);
    assert!(matches!(&events[1], GameEvent::InitialTable(cards) if cards.len() == 4));
    let wins = events
        .iter()
        .filter(|event| matches!(event, GameEvent::WinsCards(_)))
        .count();
    let running_scores = events
        .iter()
        .filter(|event| matches!(event, GameEvent::Score(_)))
        .count();
    assert_eq!(wins, 21);
    // One report per trick plus the final tally.
    assert_eq!(running_scores, wins + 1);
    assert_eq!(
        events.iter().filter(|event| matches!(event, GameEvent::Hand(_))).count(),
        24
    );

    let tail = &events[events.len() - 3..];
    assert!(matches!(tail[0], GameEvent::FinalTable { count: 1, top: Some(_) }));
    assert_eq!(tail[1], GameEvent::Score(board));
    assert_eq!(tail[2], GameEvent::GameOver);
    assert_eq!(board.won_cards(Seat::Human) + board.won_cards(Seat::Computer), 52);
    Ok(())
}
