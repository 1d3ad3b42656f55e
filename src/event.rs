use super::*;

/// Notifications emitted while exploring, for display or recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Entered a room. `fresh` is false when its clue was already recorded.
    Entered {
        room: String,
        clue: Option<Clue>,
        fresh: bool,
    },
    /// The current room has no passages; any input ends exploration.
    DeadEnd { room: String },
    /// A passage was requested where none exists.
    Blocked(Direction),
    /// Input was not a recognized command.
    Invalid,
    /// Exploration ended.
    Ended(Ending),
}
