pub mod match_result;
pub mod rank;
pub mod reward;
pub mod ticket;
pub mod winning_draw;

pub use match_result::MatchResult;
pub use rank::Rank;
pub use reward::RewardSummary;
pub use ticket::Ticket;
pub use winning_draw::WinningDraw;
