use super::*;

/// A room of the mansion and, recursively, everything reachable from it.
///
/// Each room exclusively owns its at most two children. The tree is built
/// once through the consuming builder methods ([`Room::left`],
/// [`Room::right`]) and is only read afterwards. Dropping the root releases
/// children before their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<Clue>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

/// Result of trying to leave a room in some direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passage<'a> {
    Open(&'a Room),
    Blocked,
}

impl Room {
    /// A room with no clue and no passages.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }
    /// Place a clue in the room. Empty text leaves the room without one.
    pub fn with_clue(mut self, clue: &str) -> Self {
        self.clue = Some(Clue::from(clue)).filter(|c| !c.is_empty());
        self
    }
    pub fn left(mut self, child: Room) -> Self {
        self.left = Some(Box::new(child));
        self
    }
    pub fn right(mut self, child: Room) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }
    /// Follow a passage. A missing child is an informational outcome, not an error.
    pub fn go(&self, direction: Direction) -> Passage<'_> {
        match self.child(direction) {
            Some(room) => Passage::Open(room),
            None => Passage::Blocked,
        }
    }
    /// Leaves are terminal: exploration cannot continue from them.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Number of rooms in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + Direction::all()
            .into_iter()
            .filter_map(|d| self.child(d))
            .map(Room::count)
            .sum::<usize>()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
