use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A bill cannot be split among fewer than two people, so the roster is
/// never allowed to shrink below this.
pub const MIN_PEOPLE: usize = 2;

/// Opaque identifier for a person, stable for their lifetime in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { id: PersonId::new(), name: name.into() }
    }

    /// Placeholder label for the Nth member of the group (1-based).
    pub fn numbered(position: usize) -> Self {
        Person::new(format!("Person {position}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(PersonId::new(), PersonId::new());
    }

    #[test]
    fn numbered_default_name() {
        assert_eq!(Person::numbered(3).name, "Person 3");
    }
}
