use super::*;

/// The suspect named by the player at the end of exploration.
///
/// Only surrounding line breaks are stripped. Other whitespace is kept and
/// the name is matched exactly, so `" Sr. Black"` accuses nobody bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation(String);

impl Accusation {
    /// `None` when the line names no one.
    pub fn parse(line: &str) -> Option<Self> {
        let name = line.trim_matches(|c| c == '\n' || c == '\r');
        match name.is_empty() {
            true => None,
            false => Some(Self(name.to_string())),
        }
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Number of recorded clues whose bound suspect is exactly `accused`.
/// Clues missing from the index count as non-matches.
pub fn verify(ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> Count {
    let mut count = 0;
    ledger.for_each(|clue| {
        if index.lookup(clue).is_some_and(|suspect| suspect == accused) {
            count += 1;
        }
    });
    count
}

/// Whether the evidence supports the accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sustained,
    Insufficient,
}

impl From<Count> for Verdict {
    fn from(count: Count) -> Self {
        match count >= VERDICT_THRESHOLD {
            true => Verdict::Sustained,
            false => Verdict::Insufficient,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Sustained => write!(f, "accusation sustained"),
            Verdict::Insufficient => write!(f, "insufficient evidence"),
        }
    }
}

/// A scored accusation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    accused: Accusation,
    count: Count,
    verdict: Verdict,
}

impl Judgement {
    pub fn new(ledger: &ClueLedger, index: &SuspectIndex, accused: Accusation) -> Self {
        let count = verify(ledger, index, accused.name());
        let verdict = Verdict::from(count);
        log::info!("[verdict] {} clues point to '{}'", count, accused.name());
        Self {
            accused,
            count,
            verdict,
        }
    }
    pub fn accused(&self) -> &str {
        self.accused.name()
    }
    pub fn count(&self) -> Count {
        self.count
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Clues pointing to '{}': {}", self.accused(), self.count)?;
        write!(f, "Result: {}", self.verdict)
    }
}
