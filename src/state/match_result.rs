use crate::constants::{MAX_MATCH_COUNT, MIN_MATCH_COUNT};
use crate::errors::{LottoError, LottoResult};

/// Per-ticket outcome of a round: how many numbers matched the winning set
/// and whether the bonus number was on the ticket.
///
/// `has_bonus` records the plain presence fact; only the rank mapping gives
/// it meaning (it decides second vs third place at five matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    match_count: u8,
    has_bonus: bool,
}

impl MatchResult {
    /// Guards the 0..=6 match-count bounds before any tier aggregation can
    /// see the value. Takes `i32` so negative counts are representable at
    /// the boundary.
    pub fn new(match_count: i32, has_bonus: bool) -> LottoResult<Self> {
        if !(MIN_MATCH_COUNT..=MAX_MATCH_COUNT).contains(&match_count) {
            return Err(LottoError::InvalidWinningCount { count: match_count });
        }
        Ok(Self {
            match_count: match_count as u8,
            has_bonus,
        })
    }

    #[inline]
    pub fn match_count(&self) -> u8 {
        self.match_count
    }

    #[inline]
    pub fn has_bonus(&self) -> bool {
        self.has_bonus
    }
}
