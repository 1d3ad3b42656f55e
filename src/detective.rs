use super::*;
use std::collections::VecDeque;

/// Whoever drives an exploration: a person at a terminal, a script, etc.
///
/// The expedition never reads input directly. It asks the detective for the
/// next command and tells it what happened, so scripted command sequences
/// can stand in for a console.
pub trait Detective {
    /// Next command while standing in `room`. `None` means input is exhausted.
    fn decide(&mut self, room: &Room) -> Option<Command>;
    /// Receive notification of exploration events.
    fn notify(&mut self, event: &Event);
    /// Raw text naming the accused suspect. `None` means input is exhausted.
    fn accuse(&mut self) -> Option<String>;
}

/// Detective replaying a fixed list of input lines, recording every event.
#[derive(Debug, Default, Clone)]
pub struct Script {
    lines: VecDeque<String>,
    events: Vec<Event>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Detective for Script {
    fn decide(&mut self, _: &Room) -> Option<Command> {
        self.lines.pop_front().map(|line| Command::from(line.as_str()))
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
    fn accuse(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
