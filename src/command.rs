use super::*;

/// A player instruction during exploration.
///
/// Only the first character of a line is significant, case-insensitively:
/// `e` goes left, `d` goes right, `s` leaves. Anything else, including an
/// empty line, is [`Command::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Exit,
    Invalid,
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') => Command::Go(Direction::Left),
            Some('d') => Command::Go(Direction::Right),
            Some('s') => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Go(direction) => write!(f, "go {}", direction),
            Command::Exit => write!(f, "exit"),
            Command::Invalid => write!(f, "invalid"),
        }
    }
}
