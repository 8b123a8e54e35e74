use crate::constants::{MAX_LOTTO_NUMBER, MIN_LOTTO_NUMBER, NUMBERS_PER_TICKET};
use crate::errors::{LottoError, LottoResult};

/// One purchased lotto entry: exactly six unique numbers in 1..=45,
/// held in ascending order. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    /// Validates and normalizes a candidate number set into a ticket.
    ///
    /// Input may arrive unsorted (user-entered winning numbers are); the
    /// constructor sorts before checking uniqueness, so the stored form is
    /// always ascending.
    pub fn new(mut numbers: Vec<u8>) -> LottoResult<Self> {
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(LottoError::InvalidNumberCount {
                count: numbers.len(),
            });
        }

        numbers.sort_unstable();

        for pair in numbers.windows(2) {
            if pair[0] == pair[1] {
                return Err(LottoError::DuplicateNumber { number: pair[0] });
            }
        }

        for &number in &numbers {
            validate_number_range(number as i64)?;
        }

        let mut fixed = [0u8; NUMBERS_PER_TICKET];
        fixed.copy_from_slice(&numbers);
        Ok(Self { numbers: fixed })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    #[inline]
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Size of the intersection with another ticket (set semantics; both
    /// sides are duplicate-free by construction).
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers
            .iter()
            .filter(|&&n| other.contains(n))
            .count()
    }
}

/// Range check shared by ticket numbers and the bonus number. Takes `i64`
/// so out-of-domain user input is representable in the error.
pub fn validate_number_range(number: i64) -> LottoResult<()> {
    if number < MIN_LOTTO_NUMBER as i64 || number > MAX_LOTTO_NUMBER as i64 {
        return Err(LottoError::NumberOutOfRange { number });
    }
    Ok(())
}
