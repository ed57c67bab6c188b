use tracing::{debug, info};

use crate::bot::Bot;
use crate::console::Console;
use crate::error::GameError;
use crate::game::GameBuilder;
use crate::score::ScoreBoard;
use crate::seat::Seat;
use crate::state::Phase;
use crate::visualize::GameEvent;

pub const FIRST_PLAYER_QUESTION: &str = "Play first?";

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The deck ran out and the final score was reported.
    Completed(ScoreBoard),
    /// The player quit; no final score was reported.
    Cancelled,
}

/// Plays one full game between `human` and `computer`, reporting through
/// `console`. Cancellation is not an error: it ends the round early and is
/// returned as [`RoundOutcome::Cancelled`]. `Game Over` is printed either way.
pub fn play_round(
    builder: GameBuilder,
    human: &mut dyn Bot,
    computer: &mut dyn Bot,
    console: &mut dyn Console,
) -> Result<RoundOutcome, GameError> {
    console.emit(&GameEvent::Banner);
    let outcome = match run(builder, human, computer, console) {
        Ok(board) => RoundOutcome::Completed(board),
        Err(GameError::Cancelled) => {
            info!("game cancelled by player");
            RoundOutcome::Cancelled
        }
        Err(err) => return Err(err),
    };
    console.emit(&GameEvent::GameOver);
    Ok(outcome)
}

fn run(
    builder: GameBuilder,
    human: &mut dyn Bot,
    computer: &mut dyn Bot,
    console: &mut dyn Console,
) -> Result<ScoreBoard, GameError> {
    let first_player = if console.prompt_yes_no(FIRST_PLAYER_QUESTION)? {
        Seat::Human
    } else {
        Seat::Computer
    };
    let mut game = builder.with_first_player(first_player).build()?;
    debug!(?first_player, "game started");
    console.emit(&GameEvent::InitialTable(game.table().to_vec()));

    while game.prepare_turn()? == Phase::AwaitingPlay {
        console.emit(&GameEvent::table(game.table()));
        let seat = game.current_player();
        let view = game.state_view(seat);
        let bot: &mut dyn Bot = match seat {
            Seat::Human => &mut *human,
            Seat::Computer => &mut *computer,
        };
        let index = bot.select_card(&view, console)?;
        let outcome = game.play_card(seat, index)?;
        if outcome.is_win() {
            console.emit(&GameEvent::WinsCards(seat));
            console.emit(&GameEvent::Score(game.running_score()));
        }
    }

    console.emit(&GameEvent::final_table(game.table()));
    let board = game.finish()?;
    console.emit(&GameEvent::Score(board));
    Ok(board)
}
