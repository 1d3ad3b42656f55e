//! Mansion exploration and accusation scoring for a detective game.
//!
//! A session walks a fixed binary tree of rooms, collects the clue found in
//! each visited room into an ordered, duplicate-free ledger, and finally
//! scores an accusation by counting how many collected clues are bound to
//! the accused suspect.
//!
//! ## Exploration Space
//!
//! - [`Room`] — A node in the mansion tree, optionally carrying a [`Clue`]
//! - [`Direction`] — Left or right passage out of a room
//! - [`Passage`] — Outcome of trying a direction: open or blocked
//!
//! ## Evidence
//!
//! - [`ClueLedger`] — Ordered set of collected clues (binary search tree)
//! - [`SuspectIndex`] — Fixed-bucket hash table from clue to [`Suspect`]
//!
//! ## Exploration
//!
//! - [`Command`] — A parsed player instruction
//! - [`Detective`] — Source of commands and sink of [`Event`]s
//! - [`Expedition`] — The exploration state machine
//!
//! ## Judgement
//!
//! - [`Accusation`] — The suspect named by the player
//! - [`Verdict`] — Sustained or insufficient, by [`VERDICT_THRESHOLD`]
//! - [`Judgement`] — Accused name, match count and verdict together
//!
//! ## Session
//!
//! - [`Session`] — Owns the mansion, ledger and index for one game
//! - [`mansion`] — The shipped mansion layout and clue bindings
mod clue;
mod command;
mod detective;
mod direction;
mod event;
mod expedition;
#[cfg(feature = "cli")]
mod human;
mod index;
mod ledger;
pub mod mansion;
mod room;
mod session;
mod suspect;
mod verdict;

pub use clue::*;
pub use command::*;
pub use detective::*;
pub use direction::*;
pub use event::*;
pub use expedition::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use index::*;
pub use ledger::*;
pub use room::*;
pub use session::*;
pub use suspect::*;
pub use verdict::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of collected clues pointing at a suspect.
pub type Count = usize;

// ============================================================================
// SUSPECT INDEX PARAMETERS
// Chained hash table with a fixed, prime bucket count. Never resized.
// ============================================================================
/// Number of hash buckets in the suspect index.
pub const SUSPECT_BUCKETS: usize = 101;
/// Initial value of the hash accumulator.
pub const HASH_SEED: u64 = 5381;
/// Multiplier applied to the accumulator before adding each byte.
pub const HASH_FACTOR: u64 = 33;

// ============================================================================
// JUDGEMENT
// ============================================================================
/// Minimum number of matching clues for an accusation to be sustained.
pub const VERDICT_THRESHOLD: Count = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable selecting the terminal log level.
#[cfg(feature = "cli")]
pub const LOG_LEVEL_VAR: &str = "QUEST_LOG";
/// Environment variable naming an optional debug-level log file.
#[cfg(feature = "cli")]
pub const LOG_FILE_VAR: &str = "QUEST_LOG_FILE";

/// Initialize logging: terminal on stderr, plus a file when `QUEST_LOG_FILE` is set.
/// Terminal level comes from `QUEST_LOG` and defaults to `warn` so the game
/// text on stdout stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = terminal_level(std::env::var(LOG_LEVEL_VAR).ok());
    let term: Box<dyn simplelog::SharedLogger> = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers = vec![term];
    if let Ok(path) = std::env::var(LOG_FILE_VAR) {
        let file = std::fs::File::create(&path)
            .map_err(|e| anyhow::anyhow!("create log file {}: {}", path, e))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Terminal level from the `QUEST_LOG` value, `warn` when unset or unknown.
#[cfg(feature = "cli")]
fn terminal_level(value: Option<String>) -> log::LevelFilter {
    value
        .and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn)
}
