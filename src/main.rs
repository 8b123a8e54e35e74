use std::process::ExitCode;

use lotto45::{ConsoleIo, GameController};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::thread_rng();
    let mut controller = GameController::new(ConsoleIo::new());

    match controller.run(&mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
