use super::*;
use crate::gesture::Gesture;
use crate::round::Outcome;
use crate::round::Round;
use crate::session::Tally;
use colored::Colorize;

/// Terminal rendition of the game window: one line per round with the
/// moves, the result and the sound cue, then the running score.
#[derive(Debug, Default)]
pub struct Console {
    showing: Gesture,
}

impl Feedback for Console {
    fn gesture(&mut self, gesture: Gesture) {
        if gesture != self.showing {
            log::debug!("showing {}", gesture);
            self.showing = gesture;
        }
    }

    fn round(&mut self, round: &Round, tally: &Tally) {
        let outcome = match round.outcome {
            Outcome::PlayerWin => round.outcome.to_string().green(),
            Outcome::OpponentWin => round.outcome.to_string().red(),
            Outcome::Tie => round.outcome.to_string().yellow(),
        };
        println!(
            "{} {:<8} {} {:<8} {:<12} {}",
            "Your Move:".bold(),
            round.player.to_string().yellow(),
            "AI Move:".bold(),
            round.opponent.to_string().cyan(),
            outcome,
            format!("♪ {}", Cue::from(round.outcome)).dimmed(),
        );
        println!("{}", tally.to_string().bright_green());
    }

    fn close(&mut self, tally: &Tally) {
        println!("{} {}", "Final".bold(), tally);
    }
}
