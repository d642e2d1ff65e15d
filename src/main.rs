use std::io;

use mini_othello::error::PlayError;
use mini_othello::selfplay;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlayError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    selfplay::play_game(&mut out)?;
    Ok(())
}
