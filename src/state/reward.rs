use crate::errors::{LottoError, LottoResult};
use crate::state::match_result::MatchResult;
use crate::state::rank::Rank;

/// Aggregated outcome of a round: how many tickets landed in each prize
/// bracket, the total payout, and the rate of return on the invested amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSummary {
    /// Ticket count per rank, indexed by position in [`Rank::ALL`].
    counts: [u32; Rank::ALL.len()],

    pub total_payout: u64,

    /// total_payout / investment, as a plain ratio. Percentage rendering is
    /// a presentation concern.
    pub rate_of_return: f64,
}

impl RewardSummary {
    /// Tallies a round's match results against an investment amount.
    ///
    /// RULES:
    ///   - every result has already passed the 0..=6 match-count guard
    ///   - payout accumulation is checked arithmetic, never wrapping
    ///   - a zero-win round yields payout 0 and rate 0.0
    pub fn tally(results: &[MatchResult], investment: u64) -> LottoResult<Self> {
        if investment == 0 {
            return Err(LottoError::InvalidAmount);
        }

        let mut counts = [0u32; Rank::ALL.len()];
        for result in results {
            counts[Self::slot(Rank::from_result(result))] += 1;
        }

        let mut total_payout: u64 = 0;
        for (slot, rank) in Rank::ALL.iter().enumerate() {
            let bracket = rank
                .payout()
                .checked_mul(counts[slot] as u64)
                .ok_or(LottoError::MathOverflow)?;
            total_payout = total_payout
                .checked_add(bracket)
                .ok_or(LottoError::MathOverflow)?;
        }

        let rate_of_return = total_payout as f64 / investment as f64;

        Ok(Self {
            counts,
            total_payout,
            rate_of_return,
        })
    }

    pub fn count(&self, rank: Rank) -> u32 {
        self.counts[Self::slot(rank)]
    }

    fn slot(rank: Rank) -> usize {
        Rank::ALL.iter().position(|&r| r == rank).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(count: i32, bonus: bool) -> MatchResult {
        MatchResult::new(count, bonus).unwrap()
    }

    #[test]
    fn zero_win_round_pays_nothing() {
        let results = vec![result(0, false), result(1, false), result(2, true)];
        let summary = RewardSummary::tally(&results, 1_000).unwrap();
        assert_eq!(summary.total_payout, 0);
        assert_eq!(summary.rate_of_return, 0.0);
        assert_eq!(summary.count(Rank::NoPrize), 3);
        for rank in [Rank::First, Rank::Second, Rank::Third, Rank::Fourth, Rank::Fifth] {
            assert_eq!(summary.count(rank), 0);
        }
    }

    #[test]
    fn empty_batch_is_a_valid_zero_summary() {
        let summary = RewardSummary::tally(&[], 1_000).unwrap();
        assert_eq!(summary.total_payout, 0);
        assert_eq!(summary.rate_of_return, 0.0);
    }

    #[test]
    fn second_rank_pays_thirty_million() {
        let summary = RewardSummary::tally(&[result(5, true)], 1_000).unwrap();
        assert_eq!(summary.count(Rank::Second), 1);
        assert_eq!(summary.total_payout, 30_000_000);
        assert_eq!(summary.rate_of_return, 30_000.0);
    }

    #[test]
    fn mixed_batch_sums_brackets() {
        let results = vec![
            result(3, false), // 5_000
            result(3, true),  // 5_000
            result(4, false), // 50_000
            result(5, false), // 1_500_000
            result(0, false),
        ];
        let summary = RewardSummary::tally(&results, 5_000).unwrap();
        assert_eq!(summary.count(Rank::Fifth), 2);
        assert_eq!(summary.count(Rank::Fourth), 1);
        assert_eq!(summary.count(Rank::Third), 1);
        assert_eq!(summary.total_payout, 1_560_000);
        assert_eq!(summary.rate_of_return, 312.0);
    }

    #[test]
    fn zero_investment_is_rejected() {
        let err = RewardSummary::tally(&[], 0).unwrap_err();
        assert!(matches!(err, LottoError::InvalidAmount));
    }
}
