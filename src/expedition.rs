use super::*;

/// Outcome of applying one command to the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved into the child in this direction.
    Moved(Direction),
    /// No child in this direction; still in the same room.
    Blocked(Direction),
    /// Unrecognized command; still in the same room.
    Invalid,
    /// The player asked to stop exploring.
    Exit,
}

/// Why an exploration stopped. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player asked to leave.
    Exited,
    /// A room without passages was reached.
    DeadEnd,
    /// The detective ran out of input.
    Exhausted,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Exited => write!(f, "exploration ended by the player"),
            Ending::DeadEnd => write!(f, "exploration ended at a dead end"),
            Ending::Exhausted => write!(f, "exploration ended: no more input"),
        }
    }
}

/// A single walk down the mansion, recording clues as rooms are entered.
///
/// Movement only goes from parent to child; there is no way back. Every
/// room entered has its clue recorded in the ledger, which deduplicates.
#[derive(Debug)]
pub struct Expedition<'a> {
    room: &'a Room,
    ledger: &'a mut ClueLedger,
    route: Vec<Direction>,
    fresh: bool,
}

impl<'a> Expedition<'a> {
    /// Start at `root`, recording its clue.
    pub fn new(root: &'a Room, ledger: &'a mut ClueLedger) -> anyhow::Result<Self> {
        let mut expedition = Self {
            room: root,
            ledger,
            route: Vec::new(),
            fresh: false,
        };
        expedition.enter(root)?;
        Ok(expedition)
    }
    pub fn room(&self) -> &'a Room {
        self.room
    }
    /// Directions taken from the root to the current room.
    pub fn route(&self) -> &[Direction] {
        &self.route
    }
    pub fn ledger(&self) -> &ClueLedger {
        self.ledger
    }

    fn enter(&mut self, room: &'a Room) -> anyhow::Result<()> {
        log::debug!("[expedition] entering {}", room);
        self.room = room;
        self.fresh = match room.clue() {
            Some(clue) => self.ledger.insert(clue)?,
            None => false,
        };
        Ok(())
    }

    /// Apply one command. Moving enters the child and records its clue;
    /// every other outcome leaves the state untouched.
    pub fn step(&mut self, command: Command) -> anyhow::Result<Transition> {
        let transition = match command {
            Command::Exit => Transition::Exit,
            Command::Invalid => Transition::Invalid,
            Command::Go(direction) => match Room::go(self.room, direction) {
                Passage::Blocked => Transition::Blocked(direction),
                Passage::Open(child) => {
                    self.route.push(direction);
                    self.enter(child)?;
                    Transition::Moved(direction)
                }
            },
        };
        log::debug!("[expedition] {} -> {:?}", command, transition);
        Ok(transition)
    }

    /// The arrival notice for the current room.
    pub fn arrival(&self) -> Event {
        Event::Entered {
            room: self.room.name().to_string(),
            clue: self.room.clue().cloned(),
            fresh: self.fresh,
        }
    }

    /// Drive the walk with commands from `detective` until it ends.
    pub fn run<D>(mut self, detective: &mut D) -> anyhow::Result<Ending>
    where
        D: Detective + ?Sized,
    {
        let ending = 'walk: loop {
            detective.notify(&self.arrival());
            if self.room.is_leaf() {
                detective.notify(&Event::DeadEnd {
                    room: self.room.name().to_string(),
                });
                break 'walk match detective.decide(self.room) {
                    Some(Command::Exit) => Ending::Exited,
                    Some(_) => Ending::DeadEnd,
                    None => Ending::Exhausted,
                };
            }
            loop {
                let Some(command) = detective.decide(self.room) else {
                    break 'walk Ending::Exhausted;
                };
                match self.step(command)? {
                    Transition::Moved(_) => continue 'walk,
                    Transition::Blocked(direction) => detective.notify(&Event::Blocked(direction)),
                    Transition::Invalid => detective.notify(&Event::Invalid),
                    Transition::Exit => break 'walk Ending::Exited,
                }
            }
        };
        log::info!(
            "[expedition] {} in {} after {} moves, {} clues recorded",
            ending,
            self.room,
            self.route.len(),
            self.ledger.len()
        );
        detective.notify(&Event::Ended(ending));
        Ok(ending)
    }
}
