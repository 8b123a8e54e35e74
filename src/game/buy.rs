use log::info;
use rand::Rng;

use crate::constants::TICKET_PRICE;
use crate::errors::{LottoError, LottoResult};
use crate::state::Ticket;
use crate::utils::generate::draw_ticket;

/// Turns a purchase amount into a batch of independently drawn tickets.
///
/// Ticket count is `amount / TICKET_PRICE`; a remainder below one ticket
/// price is truncated, not refunded. Amounts below one ticket price are
/// rejected outright.
pub fn buy_tickets<R: Rng + ?Sized>(rng: &mut R, amount: u64) -> LottoResult<Vec<Ticket>> {
    if amount < TICKET_PRICE {
        return Err(LottoError::InvalidAmount);
    }

    let count = amount / TICKET_PRICE;
    let tickets = (0..count)
        .map(|_| draw_ticket(rng))
        .collect::<LottoResult<Vec<_>>>()?;

    info!("purchased {} ticket(s) for {}", tickets.len(), amount);
    Ok(tickets)
}
