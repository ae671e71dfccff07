//! A table shared between threads.
//!
//! Mutations go through one write lock at a time; reads may overlap each
//! other but never a mutation. Separate tables share nothing.

use crate::table::Table;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct SharedTable {
    inner: Arc<RwLock<Table>>,
}

impl SharedTable {
    pub fn new(table: Table) -> Self {
        Self { inner: Arc::new(RwLock::new(table)) }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Table) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access.
    ///
    /// A poisoned lock is recovered rather than propagated. Every `Table`
    /// method either finishes or leaves the table untouched, so a writer that
    /// panicked left it as of its last completed call.
    pub fn write<R>(&self, f: impl FnOnce(&mut Table) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl From<Table> for SharedTable {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::table::GameState;
    use std::thread;

    #[test]
    fn concurrent_joins_are_serialized() {
        let shared = SharedTable::new(Table::new(TableConfig::default()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let t = shared.clone();
                thread::spawn(move || t.write(|table| table.add_player(format!("p{i}"), "P")))
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }
        assert_eq!(shared.read(|t| t.players().len()), 8);
        assert_eq!(shared.read(|t| t.bets().len()), 8);

        shared.write(|t| t.start()).unwrap();
        assert_eq!(shared.read(|t| t.state()), GameState::PreFlop);
    }

    #[test]
    fn a_panicking_writer_leaves_the_last_completed_call() {
        let shared = SharedTable::new(Table::new(TableConfig::default()));
        let t = shared.clone();
        let res = thread::spawn(move || {
            t.write(|table| {
                table.add_player("a", "A").unwrap();
                if table.players().len() == 1 {
                    panic!("writer gave up");
                }
            })
        })
        .join();
        assert!(res.is_err());

        assert_eq!(shared.read(|t| t.players().len()), 1);
        shared.write(|t| t.add_player("b", "B")).unwrap();
        shared.write(|t| t.start()).unwrap();
        assert_eq!(shared.read(|t| t.state()), GameState::PreFlop);
    }
}
