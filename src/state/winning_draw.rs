use crate::errors::{LottoError, LottoResult};
use crate::state::match_result::MatchResult;
use crate::state::ticket::{validate_number_range, Ticket};
use crate::utils::parse::{parse_bonus_number, parse_number_list};

/// The officially drawn numbers for a round: a six-number winning set plus
/// one bonus number. The bonus must not duplicate the winning set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningDraw {
    winning: Ticket,
    bonus: u8,
}

impl WinningDraw {
    pub fn new(winning_numbers: Vec<u8>, bonus: u8) -> LottoResult<Self> {
        let winning = Ticket::new(winning_numbers)?;
        validate_number_range(bonus as i64)?;
        if winning.contains(bonus) {
            return Err(LottoError::DuplicateNumber { number: bonus });
        }
        Ok(Self { winning, bonus })
    }

    /// Builds a draw from the raw text the user typed: a comma-separated
    /// winning list and a single bonus token.
    pub fn parse(winning_input: &str, bonus_input: &str) -> LottoResult<Self> {
        let numbers = parse_number_list(winning_input)?;
        let bonus = parse_bonus_number(bonus_input)?;
        Self::new(numbers, bonus)
    }

    pub fn winning_numbers(&self) -> &[u8] {
        self.winning.numbers()
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    /// Scores one ticket against this draw. Match count is plain set
    /// intersection; bonus presence is recorded as-is and only matters to
    /// the rank mapping.
    pub fn evaluate(&self, ticket: &Ticket) -> LottoResult<MatchResult> {
        let match_count = ticket.match_count(&self.winning);
        MatchResult::new(match_count as i32, ticket.contains(self.bonus))
    }
}
