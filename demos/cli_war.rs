//! CLI Game of War example.
//!
//! Plays one full game and writes the round-by-round log to a text file
//! (path taken from the first argument, default `game_of_war_results.txt`).

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{FileLog, Game, GameError, VictoryStatus};

fn play(seed: u64, path: &str) -> Result<VictoryStatus, GameError> {
    let mut log = FileLog::create(path)?;
    Game::new(seed).run(&mut log)
}

fn main() -> ExitCode {
    println!("The Game of War has begun.");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("game_of_war_results.txt"));
    println!("The game output can be found here: {path}");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let code = match play(seed, &path) {
        Ok(VictoryStatus::Won(player)) => {
            println!("The game was won by Player {}.", player.number());
            ExitCode::SUCCESS
        }
        Ok(VictoryStatus::Draw) => {
            println!("The game ended in a rare draw.");
            ExitCode::SUCCESS
        }
        Ok(VictoryStatus::Playing) => {
            eprintln!("The game stopped without a result.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("The game aborted: {err}");
            ExitCode::FAILURE
        }
    };

    println!("The Game of War has ended.");
    code
}
