use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use super::loader::load_file;
use super::model::PlayerTable;

// ---------------------------------------------------------------------------
// Single-entry table cache
// ---------------------------------------------------------------------------

/// Holds the most recently loaded table so UI interactions never re-read the
/// file. Only successful loads are cached.
#[derive(Debug, Default)]
pub struct TableCache {
    entry: Option<(PathBuf, Arc<PlayerTable>)>,
}

impl TableCache {
    /// Return the cached table for `path`, reading the file on a miss.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<PlayerTable>> {
        self.get_or_load_with(path, load_file)
    }

    pub fn get_or_load_with<F>(&mut self, path: &Path, load: F) -> Result<Arc<PlayerTable>>
    where
        F: FnOnce(&Path) -> Result<PlayerTable>,
    {
        if let Some((cached_path, table)) = &self.entry {
            if cached_path == path {
                log::debug!("table cache hit for {}", path.display());
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(load(path)?);
        self.entry = Some((path.to_path_buf(), Arc::clone(&table)));
        Ok(table)
    }

    /// Drop the cached table; the next `get_or_load` reads from disk.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn cached_path(&self) -> Option<&Path> {
        self.entry.as_ref().map(|(p, _)| p.as_path())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use super::*;
    use crate::data::fixtures::three_players;

    #[test]
    fn loads_once_per_path() {
        let mut cache = TableCache::default();
        let calls = Cell::new(0);
        let loader = |_: &Path| -> Result<PlayerTable> {
            calls.set(calls.get() + 1);
            Ok(three_players())
        };

        let a = cache.get_or_load_with(Path::new("players.csv"), loader).unwrap();
        let b = cache.get_or_load_with(Path::new("players.csv"), loader).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&a, &b));

        cache.get_or_load_with(Path::new("other.csv"), loader).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.cached_path(), Some(Path::new("other.csv")));
    }

    #[test]
    fn invalidate_forces_reload() {
        let mut cache = TableCache::default();
        let calls = Cell::new(0);
        let loader = |_: &Path| -> Result<PlayerTable> {
            calls.set(calls.get() + 1);
            Ok(three_players())
        };
        cache.get_or_load_with(Path::new("p.csv"), loader).unwrap();
        cache.invalidate();
        cache.get_or_load_with(Path::new("p.csv"), loader).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut cache = TableCache::default();
        let result = cache.get_or_load_with(Path::new("p.csv"), |_| Err(anyhow!("boom")));
        assert!(result.is_err());
        assert!(cache.cached_path().is_none());
        assert!(cache
            .get_or_load_with(Path::new("p.csv"), |_| Ok(three_players()))
            .is_ok());
    }
}
