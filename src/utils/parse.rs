//! Text → domain parsing for the interactive boundaries. Every failure is a
//! [`LottoError`] the controller can show and re-prompt on, never a panic.

use crate::constants::{END_COMMAND, RESTART_COMMAND, TICKET_PRICE};
use crate::errors::{LottoError, LottoResult};
use crate::state::ticket::validate_number_range;

/// What the user chose after seeing a round result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    End,
}

/// Parses a purchase amount. Anything that is not a positive integer of at
/// least one ticket price is an `InvalidAmount`.
pub fn parse_amount(input: &str) -> LottoResult<u64> {
    let amount: u64 = input.trim().parse().map_err(|_| LottoError::InvalidAmount)?;
    if amount < TICKET_PRICE {
        return Err(LottoError::InvalidAmount);
    }
    Ok(amount)
}

/// Parses a comma-separated number list ("1, 2,3"). Range, uniqueness and
/// count are left to `Ticket::new`; only numeric-ness and range are checked
/// here so the offending token shows up in the error.
pub fn parse_number_list(input: &str) -> LottoResult<Vec<u8>> {
    input.split(',').map(parse_lotto_number).collect()
}

pub fn parse_bonus_number(input: &str) -> LottoResult<u8> {
    parse_lotto_number(input)
}

fn parse_lotto_number(token: &str) -> LottoResult<u8> {
    let token = token.trim();
    let number: i64 = token.parse().map_err(|_| LottoError::NotANumber {
        input: token.to_string(),
    })?;
    validate_number_range(number)?;
    Ok(number as u8)
}

pub fn parse_command(input: &str) -> LottoResult<Command> {
    match input.trim() {
        RESTART_COMMAND => Ok(Command::Restart),
        END_COMMAND => Ok(Command::End),
        other => Err(LottoError::UnknownCommand {
            input: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LottoErrorKind;

    #[test]
    fn amount_accepts_exact_and_uneven_multiples() {
        assert_eq!(parse_amount("1000").unwrap(), 1_000);
        assert_eq!(parse_amount(" 8000 ").unwrap(), 8_000);
        assert_eq!(parse_amount("1500").unwrap(), 1_500);
    }

    #[test]
    fn amount_rejects_non_positive_and_junk() {
        for bad in ["0", "999", "-1000", "12.5", "abc", ""] {
            let err = parse_amount(bad).unwrap_err();
            assert_eq!(err.kind(), LottoErrorKind::InvalidAmount, "input {bad:?}");
        }
    }

    #[test]
    fn number_list_trims_whitespace() {
        assert_eq!(
            parse_number_list("1, 2,3 , 4,5,45").unwrap(),
            vec![1, 2, 3, 4, 5, 45]
        );
    }

    #[test]
    fn number_list_reports_bad_token() {
        let err = parse_number_list("1,2,x,4,5,6").unwrap_err();
        assert_eq!(err.kind(), LottoErrorKind::NotANumber);
        assert!(err.to_string().contains('x'));
    }

    #[test]
    fn number_list_reports_out_of_range_value() {
        let err = parse_number_list("1,2,3,4,5,46").unwrap_err();
        assert_eq!(err.kind(), LottoErrorKind::NumberOutOfRange);

        let err = parse_number_list("0,2,3,4,5,6").unwrap_err();
        assert_eq!(err.kind(), LottoErrorKind::NumberOutOfRange);
    }

    #[test]
    fn bonus_parses_like_a_single_number() {
        assert_eq!(parse_bonus_number(" 7 ").unwrap(), 7);
        assert!(parse_bonus_number("46").is_err());
        assert!(parse_bonus_number("seven").is_err());
    }

    #[test]
    fn commands_are_exact_tokens() {
        assert_eq!(parse_command("restart").unwrap(), Command::Restart);
        assert_eq!(parse_command(" end ").unwrap(), Command::End);
        let err = parse_command("quit").unwrap_err();
        assert_eq!(err.kind(), LottoErrorKind::UnknownCommand);
    }
}
