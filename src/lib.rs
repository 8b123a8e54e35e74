//! 6/45 lotto game: buy randomly drawn tickets, score them against a winning
//! draw, and report per-rank counts and rate of return. The rule engine is
//! presentation-agnostic; `game::ConsoleIo` is the stdin/stdout adapter.

// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod errors;
pub mod game;
pub mod state;
pub mod utils;

pub use errors::{LottoError, LottoErrorKind, LottoResult};
pub use game::{ConsoleIo, GameController, GameIo};
pub use state::{MatchResult, Rank, RewardSummary, Ticket, WinningDraw};
