use super::*;
use std::cmp::Ordering;

/// Node of the ledger's search tree, linked to its children by arena index.
#[derive(Debug, Clone)]
struct Node {
    clue: Clue,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered, duplicate-free record of the clues collected in one session.
///
/// An unbalanced binary search tree keyed by lexicographic order, stored in
/// a flat arena. Insertion follows the plain ordered-insert policy: average
/// O(log n), O(n) when clues arrive already sorted. The ledger only grows.
#[derive(Debug, Clone, Default)]
pub struct ClueLedger {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record a clue. Returns whether the ledger grew.
    ///
    /// Empty clues and clues already present are ignored. Running out of
    /// memory is reported as an error instead of aborting.
    pub fn insert(&mut self, clue: &Clue) -> anyhow::Result<bool> {
        if clue.is_empty() {
            return Ok(false);
        }
        // reserve before linking so a failed allocation leaves no dangling index
        self.nodes.try_reserve(1)?;
        let index = self.nodes.len();
        let mut slot = &mut self.root;
        while let Some(cursor) = *slot {
            let node = &mut self.nodes[cursor];
            slot = match clue.cmp(&node.clue) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Ok(false),
            };
        }
        *slot = Some(index);
        self.nodes.push(Node {
            clue: clue.clone(),
            left: None,
            right: None,
        });
        log::debug!("[ledger] recorded \"{}\" ({} total)", clue, self.nodes.len());
        Ok(true)
    }

    pub fn contains(&self, clue: &Clue) -> bool {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match clue.cmp(&node.clue) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Ascending in-order walk. Each call starts a fresh, finite pass.
    pub fn iter(&self) -> Clues<'_> {
        let mut clues = Clues {
            ledger: self,
            stack: Vec::new(),
        };
        clues.descend(self.root);
        clues
    }

    /// Visit every clue once, in ascending order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Clue),
    {
        self.iter().for_each(visitor)
    }
}

/// Lazy in-order iterator over a [`ClueLedger`].
#[derive(Debug, Clone)]
pub struct Clues<'a> {
    ledger: &'a ClueLedger,
    stack: Vec<usize>,
}

impl<'a> Clues<'a> {
    /// Push the leftmost spine starting at `cursor`.
    fn descend(&mut self, mut cursor: Option<usize>) {
        while let Some(index) = cursor {
            self.stack.push(index);
            cursor = self.ledger.nodes[index].left;
        }
    }
}

impl<'a> Iterator for Clues<'a> {
    type Item = &'a Clue;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.ledger.nodes[index];
        self.descend(node.right);
        Some(&node.clue)
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a Clue;
    type IntoIter = Clues<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for ClueLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no clues collected)");
        }
        self.iter().try_for_each(|clue| writeln!(f, " - {}", clue))
    }
}
