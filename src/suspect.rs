/// The name of a suspect, compared as exact, case-sensitive text.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suspect(String);

impl Suspect {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Suspect {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for Suspect {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Suspect {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
impl PartialEq<&str> for Suspect {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
