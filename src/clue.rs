/// A piece of evidence found in a room.
///
/// Identity is exact text equality and ordering is lexicographic over the
/// underlying bytes, so two clues differing only in case or accents are
/// distinct entries.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clue(String);

impl Clue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Empty clues are never recorded nor indexed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Clue {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for Clue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Clue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        assert!(Clue::from("Chave enferrujada") < Clue::from("Fio de tecido azul"));
        assert!(Clue::from("Pegadas que") < Clue::from("Pegadas sujas"));
        assert!(Clue::from("Zebra") < Clue::from("abacate"));
    }
    #[test]
    fn exact_identity() {
        assert_eq!(Clue::from("Chave"), Clue::from(String::from("Chave")));
        assert_ne!(Clue::from("Chave"), Clue::from("chave"));
        assert_ne!(Clue::from("Chave"), Clue::from("Chave "));
    }
}
