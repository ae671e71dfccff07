use crate::table::{Table, TableError};
use std::collections::HashMap;

/// Maps an opaque player id to a display name.
pub trait NameResolver: Send + Sync {
    fn name_for(&self, id: &str) -> String;
}

/// Seat `id` at `table` under the name `names` knows it by.
pub fn seat_player(
    table: &mut Table,
    names: &dyn NameResolver,
    id: &str,
) -> Result<(), TableError> {
    table.add_player(id, names.name_for(id))
}

/// In-memory id -> name directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDirectory {
    names: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PlayerDirectory {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new() -> Self {
        Self::default()
    }

    /// The house roster of regulars.
    pub fn house() -> Self {
        [
            ("al-capone", "Al Capone"),
            ("pat-garret", "Pat Garret"),
            ("wyatt-earp", "Wyatt Earp"),
            ("doc-holiday", "Doc Holiday"),
            ("wild-bill", "Wild Bill"),
            ("stu-ungar", "Stu Ungar"),
            ("kitty-leroy", "Kitty Leroy"),
            ("poker-alice", "Poker Alice"),
            ("madame-moustache", "Madame Moustache"),
        ]
        .into_iter()
        .fold(Self::new(), |dir, (id, name)| dir.with(id, name))
    }

    /// Add or rename an entry. Insertion order is kept for `entries`.
    pub fn with(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.index.get(&id) {
            Some(&i) => self.names[i].1 = name,
            None => {
                self.index.insert(id.clone(), self.names.len());
                self.names.push((id, name));
            }
        }
    }

    /// `(id, name)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for PlayerDirectory {
    fn name_for(&self, id: &str) -> String {
        self.index
            .get(id)
            .map(|&i| self.names[i].1.clone())
            .unwrap_or_else(|| Self::UNKNOWN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ids_and_falls_back_to_unknown() {
        let dir = PlayerDirectory::house();
        assert_eq!(dir.name_for("al-capone"), "Al Capone");
        assert_eq!(dir.name_for("nobody"), "Unknown");
        assert_eq!(dir.len(), 9);
    }

    #[test]
    fn insert_renames_in_place() {
        let mut dir = PlayerDirectory::new().with("a", "Alpha").with("b", "Beta");
        dir.insert("a", "Alfa");
        let entries: Vec<(&str, &str)> = dir.entries().collect();
        assert_eq!(entries, vec![("a", "Alfa"), ("b", "Beta")]);
    }

    #[test]
    fn seating_uses_the_resolved_name() {
        use crate::config::TableConfig;

        let dir = PlayerDirectory::house();
        let mut table = Table::new(TableConfig::default());
        seat_player(&mut table, &dir, "wild-bill").unwrap();
        seat_player(&mut table, &dir, "stranger").unwrap();
        assert_eq!(table.players()[0].name(), "Wild Bill");
        assert_eq!(table.players()[1].name(), "Unknown");
        assert!(matches!(
            seat_player(&mut table, &dir, "wild-bill"),
            Err(TableError::DuplicatePlayer(_))
        ));
    }
}
