use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{MAX_LOTTO_NUMBER, MIN_LOTTO_NUMBER, NUMBERS_PER_TICKET};
use crate::errors::LottoResult;
use crate::state::Ticket;

/// Draws one ticket: six numbers sampled uniformly without replacement from
/// 1..=45. The RNG is passed in so callers can seed deterministically.
pub fn draw_ticket<R: Rng + ?Sized>(rng: &mut R) -> LottoResult<Ticket> {
    let pool: Vec<u8> = (MIN_LOTTO_NUMBER..=MAX_LOTTO_NUMBER).collect();
    let picked: Vec<u8> = pool
        .choose_multiple(rng, NUMBERS_PER_TICKET)
        .copied()
        .collect();
    // Ticket::new sorts and re-checks the invariants the sampler already
    // guarantees by construction.
    Ticket::new(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drawn_tickets_hold_all_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let ticket = draw_ticket(&mut rng).unwrap();
            let numbers = ticket.numbers();
            assert_eq!(numbers.len(), NUMBERS_PER_TICKET);
            for pair in numbers.windows(2) {
                assert!(pair[0] < pair[1], "not strictly ascending: {numbers:?}");
            }
            assert!(numbers.iter().all(|&n| (1..=45).contains(&n)));
        }
    }

    #[test]
    fn same_seed_draws_same_ticket() {
        let a = draw_ticket(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = draw_ticket(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_number_is_eventually_drawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 46];
        for _ in 0..2_000 {
            for &n in draw_ticket(&mut rng).unwrap().numbers() {
                seen[n as usize] = true;
            }
        }
        assert!(seen[1..=45].iter().all(|&s| s), "sampler never hit some number");
    }
}
