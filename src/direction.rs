/// A passage out of a room: the left or the right child.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Both directions in prompt order.
    pub const fn all() -> [Direction; 2] {
        [Direction::Left, Direction::Right]
    }
    /// Key the player types to take this passage.
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
