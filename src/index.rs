use super::*;

/// One clue→suspect association in a bucket chain.
#[derive(Debug, Clone)]
struct Binding {
    clue: Clue,
    suspect: Suspect,
}

/// Associates each clue with the suspect it implicates.
///
/// A chained hash table with [`SUSPECT_BUCKETS`] buckets that is never
/// resized. New clues go to the front of their bucket's chain. Each clue
/// maps to at most one suspect; binding a clue again replaces the previous
/// suspect.
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Vec<Binding>>,
    len: usize,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); SUSPECT_BUCKETS],
            len: 0,
        }
    }
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::default()
    }
    /// Build an index from static (clue, suspect) pairs, later pairs winning.
    pub fn bind<'a, I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new();
        for (clue, suspect) in pairs {
            index.insert(&Clue::from(clue), Suspect::from(suspect))?;
        }
        Ok(index)
    }
    /// Number of distinct clues bound.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket a clue lands in: `h = h * 33 + byte` from 5381, modulo the bucket count.
    pub fn bucket(clue: &Clue) -> usize {
        let hash = clue
            .as_str()
            .bytes()
            .fold(HASH_SEED, |h, b| h.wrapping_mul(HASH_FACTOR).wrapping_add(b as u64));
        (hash % SUSPECT_BUCKETS as u64) as usize
    }

    /// Bind a clue to a suspect, overwriting any earlier suspect for it.
    /// Empty clues are ignored.
    pub fn insert(&mut self, clue: &Clue, suspect: Suspect) -> anyhow::Result<()> {
        if clue.is_empty() {
            return Ok(());
        }
        let chain = &mut self.buckets[Self::bucket(clue)];
        if let Some(binding) = chain.iter_mut().find(|b| b.clue == *clue) {
            if binding.suspect != suspect {
                log::warn!(
                    "[index] \"{}\" rebound from {} to {}",
                    clue,
                    binding.suspect,
                    suspect
                );
                binding.suspect = suspect;
            }
            return Ok(());
        }
        chain.try_reserve(1)?;
        chain.insert(
            0,
            Binding {
                clue: clue.clone(),
                suspect,
            },
        );
        self.len += 1;
        Ok(())
    }

    /// Suspect bound to a clue, if any. A miss is a normal outcome.
    pub fn lookup(&self, clue: &Clue) -> Option<&Suspect> {
        if clue.is_empty() {
            return None;
        }
        self.buckets[Self::bucket(clue)]
            .iter()
            .find(|b| b.clue == *clue)
            .map(|b| &b.suspect)
    }
}
