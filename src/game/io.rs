use std::io;

use crate::errors::LottoError;
use crate::state::{RewardSummary, Ticket};

/// Which piece of input the controller is waiting on. Adapters choose the
/// wording; the engine only cares which state machine input comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Amount,
    WinningNumbers,
    BonusNumber,
    Command,
}

/// Seam between the rule engine and a presentation layer. The engine hands
/// over structured data (tickets, summaries, errors) and receives raw input
/// lines; all formatting and localization stays on the adapter side.
///
/// `ConsoleIo` implements this over stdin/stdout; controller tests use a
/// scripted in-memory implementation.
pub trait GameIo {
    /// Solicits the next input line for `kind`. An `Err` here is fatal to
    /// the session (closed stream), not a validation failure.
    fn prompt(&mut self, kind: PromptKind) -> io::Result<String>;

    fn show_tickets(&mut self, tickets: &[Ticket]);

    fn show_summary(&mut self, summary: &RewardSummary);

    fn show_error(&mut self, error: &LottoError);
}
