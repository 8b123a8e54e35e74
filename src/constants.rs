/// Smallest number a ticket may carry.
pub const MIN_LOTTO_NUMBER: u8 = 1;

/// Largest number a ticket may carry.
pub const MAX_LOTTO_NUMBER: u8 = 45;

/// How many numbers make up one ticket.
pub const NUMBERS_PER_TICKET: usize = 6;

/// Price of a single ticket. Purchase amounts below this are rejected;
/// any remainder above a whole multiple is truncated, not refunded.
pub const TICKET_PRICE: u64 = 1_000;

/// Valid bounds for a per-ticket match count.
pub const MIN_MATCH_COUNT: i32 = 0;
pub const MAX_MATCH_COUNT: i32 = 6;

pub const FIRST_PRIZE: u64 = 2_000_000_000;   // 6 matches
pub const SECOND_PRIZE: u64 = 30_000_000;     // 5 matches + bonus
pub const THIRD_PRIZE: u64 = 1_500_000;       // 5 matches
pub const FOURTH_PRIZE: u64 = 50_000;         // 4 matches
pub const FIFTH_PRIZE: u64 = 5_000;           // 3 matches

/// Command tokens accepted after a round result is shown.
pub const RESTART_COMMAND: &str = "restart";
pub const END_COMMAND: &str = "end";
