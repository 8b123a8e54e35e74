use thiserror::Error;

use crate::constants::{
    MAX_LOTTO_NUMBER, MAX_MATCH_COUNT, MIN_LOTTO_NUMBER, MIN_MATCH_COUNT, NUMBERS_PER_TICKET,
    TICKET_PRICE,
};

pub type LottoResult<T> = Result<T, LottoError>;

#[derive(Debug, Error)]
pub enum LottoError {
    // ─────────────────────────────
    // Purchase validation
    // ─────────────────────────────
    #[error("purchase amount must be a positive whole number of at least {TICKET_PRICE}")]
    InvalidAmount,

    // ─────────────────────────────
    // Number validation
    // ─────────────────────────────
    #[error("lotto number {number} is outside the {MIN_LOTTO_NUMBER}..={MAX_LOTTO_NUMBER} range")]
    NumberOutOfRange { number: i64 },

    #[error("duplicate lotto number {number}")]
    DuplicateNumber { number: u8 },

    #[error("expected exactly {NUMBERS_PER_TICKET} lotto numbers, got {count}")]
    InvalidNumberCount { count: usize },

    // ─────────────────────────────
    // Result computation
    // ─────────────────────────────
    #[error("match count {count} is outside the {MIN_MATCH_COUNT}..={MAX_MATCH_COUNT} range")]
    InvalidWinningCount { count: i32 },

    #[error("math overflow")]
    MathOverflow,

    // ─────────────────────────────
    // Input parsing
    // ─────────────────────────────
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("unknown command '{input}', expected 'restart' or 'end'")]
    UnknownCommand { input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Machine-distinguishable kind of a [`LottoError`], independent of the
/// human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LottoErrorKind {
    InvalidAmount,
    NumberOutOfRange,
    DuplicateNumber,
    InvalidNumberCount,
    InvalidWinningCount,
    MathOverflow,
    NotANumber,
    UnknownCommand,
    Io,
}

impl LottoError {
    pub fn kind(&self) -> LottoErrorKind {
        match self {
            LottoError::InvalidAmount => LottoErrorKind::InvalidAmount,
            LottoError::NumberOutOfRange { .. } => LottoErrorKind::NumberOutOfRange,
            LottoError::DuplicateNumber { .. } => LottoErrorKind::DuplicateNumber,
            LottoError::InvalidNumberCount { .. } => LottoErrorKind::InvalidNumberCount,
            LottoError::InvalidWinningCount { .. } => LottoErrorKind::InvalidWinningCount,
            LottoError::MathOverflow => LottoErrorKind::MathOverflow,
            LottoError::NotANumber { .. } => LottoErrorKind::NotANumber,
            LottoError::UnknownCommand { .. } => LottoErrorKind::UnknownCommand,
            LottoError::Io(_) => LottoErrorKind::Io,
        }
    }

    /// Whether the interactive controller may re-prompt after this error.
    /// I/O failures and internal invariant violations are fatal.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LottoError::Io(_) | LottoError::MathOverflow)
    }
}
