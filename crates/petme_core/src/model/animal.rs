//! Animal domain entity.

/// A kind of pet, e.g. "Dog" or "Cat".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Animal {
    /// Stable identity. `None` until the store assigns one on create.
    pub id: Option<String>,
    /// Display label.
    pub name: Option<String>,
}

impl Animal {
    /// Creates an animal with a known identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// Creates an animal that has not been stored yet.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}
