use std::io::{self, BufRead, Write};

use crate::errors::LottoError;
use crate::game::io::{GameIo, PromptKind};
use crate::state::{Rank, RewardSummary, Ticket};

/// Line-oriented stdin/stdout adapter. Owns every display string the game
/// shows; the engine never formats anything itself.
pub struct ConsoleIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl ConsoleIo {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    fn print(&mut self, message: &str) {
        // Display failures on a best-effort channel are not game errors.
        let _ = writeln!(self.stdout, "{message}");
    }
}

impl Default for ConsoleIo {
    fn default() -> Self {
        Self::new()
    }
}

impl GameIo for ConsoleIo {
    fn prompt(&mut self, kind: PromptKind) -> io::Result<String> {
        let message = match kind {
            PromptKind::Amount => "Enter the purchase amount (1,000 per ticket).",
            PromptKind::WinningNumbers => "Enter the winning numbers, comma separated.",
            PromptKind::BonusNumber => "Enter the bonus number.",
            PromptKind::Command => "Play again? (restart / end)",
        };
        writeln!(self.stdout, "{message}")?;
        self.stdout.flush()?;

        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            // stdin closed mid-prompt, nothing sensible to retry
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show_tickets(&mut self, tickets: &[Ticket]) {
        self.print(&format!("You purchased {} ticket(s).", tickets.len()));
        for ticket in tickets {
            self.print(&format_ticket(ticket));
        }
    }

    fn show_summary(&mut self, summary: &RewardSummary) {
        self.print("Winning statistics");
        self.print("---");
        // Lowest bracket first, matching the classic lotto result board.
        for rank in [Rank::Fifth, Rank::Fourth, Rank::Third, Rank::Second, Rank::First] {
            self.print(&format!(
                "{} - {} ticket(s)",
                rank_label(rank),
                summary.count(rank)
            ));
        }
        self.print(&format!(
            "Total rate of return: {:.1}%.",
            summary.rate_of_return * 100.0
        ));
    }

    fn show_error(&mut self, error: &LottoError) {
        self.print(&format!("[ERROR] {error}"));
    }
}

fn format_ticket(ticket: &Ticket) -> String {
    let numbers: Vec<String> = ticket.numbers().iter().map(u8::to_string).collect();
    format!("[{}]", numbers.join(", "))
}

fn rank_label(rank: Rank) -> String {
    let bonus_tag = if rank == Rank::Second { " + bonus" } else { "" };
    format!(
        "{} matches{} ({})",
        rank.match_count(),
        bonus_tag,
        group_thousands(rank.payout())
    )
}

/// Renders 2000000000 as "2,000,000,000".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_render_bracketed_and_comma_separated() {
        let ticket = Ticket::new(vec![45, 1, 23, 7, 12, 36]).unwrap();
        assert_eq!(format_ticket(&ticket), "[1, 7, 12, 23, 36, 45]");
    }

    #[test]
    fn rank_labels_carry_payout_and_bonus_tag() {
        assert_eq!(rank_label(Rank::Fifth), "3 matches (5,000)");
        assert_eq!(rank_label(Rank::Second), "5 matches + bonus (30,000,000)");
        assert_eq!(rank_label(Rank::First), "6 matches (2,000,000,000)");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5_000), "5,000");
        assert_eq!(group_thousands(2_000_000_000), "2,000,000,000");
    }
}
