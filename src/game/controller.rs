use log::{debug, info, warn};
use rand::Rng;

use crate::errors::LottoResult;
use crate::game::buy::buy_tickets;
use crate::game::io::{GameIo, PromptKind};
use crate::game::resolve::resolve_round;
use crate::state::{Ticket, WinningDraw};
use crate::utils::parse::{
    parse_amount, parse_bonus_number, parse_command, parse_number_list, Command,
};

/// ---------------------------------------------------------------------------
/// GameController
///
/// Drives the round state machine over a [`GameIo`] adapter:
///
///   AwaitingAmount → TicketsIssued → AwaitingWinningInfo → ResultReady
///       → AwaitingRestartChoice → (AwaitingAmount | Terminated)
///
/// RULES:
///   - a validation failure re-solicits the SAME input after showing the
///     error; it never advances the machine or discards issued tickets
///   - restart is an explicit loop iteration, never recursion
///   - I/O failures (closed stream) abort the session with an error
/// ---------------------------------------------------------------------------
pub struct GameController<Io: GameIo> {
    io: Io,
}

impl<Io: GameIo> GameController<Io> {
    pub fn new(io: Io) -> Self {
        Self { io }
    }

    /// Runs rounds until the user enters the end command.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LottoResult<()> {
        loop {
            self.play_round(rng)?;
            match self.read_until_valid(PromptKind::Command, parse_command)? {
                Command::Restart => {
                    info!("restarting with a fresh round");
                    continue;
                }
                Command::End => {
                    info!("session ended by user");
                    return Ok(());
                }
            }
        }
    }

    fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LottoResult<()> {
        let amount = self.read_until_valid(PromptKind::Amount, parse_amount)?;
        let tickets = buy_tickets(rng, amount)?;
        self.io.show_tickets(&tickets);

        let draw = self.read_draw()?;
        let summary = resolve_round(&tickets, &draw, amount)?;
        self.io.show_summary(&summary);
        Ok(())
    }

    /// Collects the winning numbers, then the bonus. The bonus prompt
    /// re-validates against the winning set, so a duplicate bonus re-asks
    /// only the bonus; the accepted winning set stays put.
    fn read_draw(&mut self) -> LottoResult<WinningDraw> {
        let winning = self.read_until_valid(PromptKind::WinningNumbers, |line| {
            Ticket::new(parse_number_list(line)?)
        })?;

        self.read_until_valid(PromptKind::BonusNumber, |line| {
            let bonus = parse_bonus_number(line)?;
            WinningDraw::new(winning.numbers().to_vec(), bonus)
        })
    }

    /// Prompt-parse loop: re-asks the same input on any retryable error,
    /// propagates fatal ones.
    fn read_until_valid<T, F>(&mut self, kind: PromptKind, parse: F) -> LottoResult<T>
    where
        F: Fn(&str) -> LottoResult<T>,
    {
        loop {
            let line = self.io.prompt(kind)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    warn!("rejected input for {kind:?}: {err}");
                    self.io.show_error(&err);
                }
                Err(err) => {
                    debug!("fatal error during {kind:?}: {err}");
                    return Err(err);
                }
            }
        }
    }
}
