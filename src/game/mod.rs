pub mod buy;
pub mod console;
pub mod controller;
pub mod io;
pub mod resolve;

pub use buy::buy_tickets;
pub use console::ConsoleIo;
pub use controller::GameController;
pub use io::{GameIo, PromptKind};
pub use resolve::resolve_round;
