use log::info;

use crate::errors::LottoResult;
use crate::state::{RewardSummary, Ticket, WinningDraw};

/// ---------------------------------------------------------------------------
/// resolve_round
///
/// Called once per round after the winning draw is known.
///
/// RULES:
///   - every ticket is scored against the draw (set intersection + bonus)
///   - per-rank counts, total payout and rate of return come from one tally
///   - the input tickets are untouched; a failed resolution never corrupts
///     the already-issued batch
/// ---------------------------------------------------------------------------
pub fn resolve_round(
    tickets: &[Ticket],
    draw: &WinningDraw,
    investment: u64,
) -> LottoResult<RewardSummary> {
    // 1) Score every ticket
    let results = tickets
        .iter()
        .map(|ticket| draw.evaluate(ticket))
        .collect::<LottoResult<Vec<_>>>()?;

    // 2) Aggregate into brackets
    let summary = RewardSummary::tally(&results, investment)?;

    info!(
        "round resolved: {} ticket(s), payout {}, rate {:.4}",
        tickets.len(),
        summary.total_payout,
        summary.rate_of_return
    );
    Ok(summary)
}
