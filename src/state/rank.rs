use crate::constants::{FIFTH_PRIZE, FIRST_PRIZE, FOURTH_PRIZE, SECOND_PRIZE, THIRD_PRIZE};
use crate::state::match_result::MatchResult;

/// Prize bracket for one ticket. The bonus number only separates second
/// from third place, at exactly five matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoPrize,
}

impl Rank {
    /// All ranks in display order, winning brackets first.
    pub const ALL: [Rank; 6] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::NoPrize,
    ];

    pub fn from_result(result: &MatchResult) -> Rank {
        match (result.match_count(), result.has_bonus()) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::NoPrize,
        }
    }

    /// Fixed payout for one ticket of this rank.
    pub fn payout(&self) -> u64 {
        match self {
            Rank::First => FIRST_PRIZE,
            Rank::Second => SECOND_PRIZE,
            Rank::Third => THIRD_PRIZE,
            Rank::Fourth => FOURTH_PRIZE,
            Rank::Fifth => FIFTH_PRIZE,
            Rank::NoPrize => 0,
        }
    }

    /// Match count that defines this bracket, for display.
    pub fn match_count(&self) -> u8 {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
            Rank::NoPrize => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_of(count: i32, bonus: bool) -> Rank {
        Rank::from_result(&MatchResult::new(count, bonus).unwrap())
    }

    #[test]
    fn six_matches_is_first_regardless_of_bonus() {
        assert_eq!(rank_of(6, false), Rank::First);
        assert_eq!(rank_of(6, true), Rank::First);
    }

    #[test]
    fn bonus_splits_five_matches() {
        assert_eq!(rank_of(5, true), Rank::Second);
        assert_eq!(rank_of(5, false), Rank::Third);
    }

    #[test]
    fn bonus_is_irrelevant_below_five_matches() {
        assert_eq!(rank_of(4, true), Rank::Fourth);
        assert_eq!(rank_of(3, true), Rank::Fifth);
        assert_eq!(rank_of(2, true), Rank::NoPrize);
        assert_eq!(rank_of(0, false), Rank::NoPrize);
    }

    #[test]
    fn payout_table() {
        assert_eq!(Rank::First.payout(), 2_000_000_000);
        assert_eq!(Rank::Second.payout(), 30_000_000);
        assert_eq!(Rank::Third.payout(), 1_500_000);
        assert_eq!(Rank::Fourth.payout(), 50_000);
        assert_eq!(Rank::Fifth.payout(), 5_000);
        assert_eq!(Rank::NoPrize.payout(), 0);
    }
}
