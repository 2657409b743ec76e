//! URL entry entity mapping an alias to its target.

/// A stored alias → target mapping.
///
/// The alias is globally unique and never changes once the row exists.
/// The same target may appear under any number of aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub id: i64,
    pub target: String,
    pub alias: String,
}

impl UrlEntry {
    pub fn new(id: i64, target: String, alias: String) -> Self {
        Self { id, target, alias }
    }
}
