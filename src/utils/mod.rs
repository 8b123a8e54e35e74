pub mod generate;
pub mod parse;

pub use generate::draw_ticket;
pub use parse::Command;
