use super::*;

/// One game: the mansion, the clues collected in it, and who they implicate.
///
/// The session exclusively owns all three structures. Exploration fills the
/// ledger; the index is fixed once built.
#[derive(Debug)]
pub struct Session {
    mansion: Room,
    ledger: ClueLedger,
    index: SuspectIndex,
}

impl Session {
    pub fn new<'a, I>(mansion: Room, bindings: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let index = SuspectIndex::bind(bindings)?;
        log::debug!(
            "[session] {} rooms, {} bound clues",
            mansion.count(),
            index.len()
        );
        Ok(Self {
            mansion,
            ledger: ClueLedger::new(),
            index,
        })
    }
    /// The shipped mansion with its designer bindings.
    pub fn standard() -> anyhow::Result<Self> {
        Self::new(mansion::layout(), mansion::BINDINGS)
    }
    pub fn mansion(&self) -> &Room {
        &self.mansion
    }
    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }
    pub fn index(&self) -> &SuspectIndex {
        &self.index
    }

    /// Walk the mansion from its root under the detective's direction.
    pub fn explore<D>(&mut self, detective: &mut D) -> anyhow::Result<Ending>
    where
        D: Detective + ?Sized,
    {
        Expedition::new(&self.mansion, &mut self.ledger)?.run(detective)
    }

    /// Score an accusation. `None` when the text names no one.
    pub fn accuse(&self, text: &str) -> Option<Judgement> {
        Accusation::parse(text).map(|accused| Judgement::new(&self.ledger, &self.index, accused))
    }
}
