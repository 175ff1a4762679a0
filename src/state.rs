use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::aggregate::Overview;
use crate::analysis::comparison::{PlayerComparison, SelectionError};
use crate::config::DashboardConfig;
use crate::data::cache::TableCache;
use crate::data::filter::{distinct_positions, players_for_position};
use crate::data::model::PlayerTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current table was (or should be) read from.
    pub data_path: PathBuf,

    /// Loaded table (None until a load succeeds).
    pub table: Option<Arc<PlayerTable>>,

    /// Distinct positions of the table, first-occurrence order.
    pub positions: Vec<String>,

    /// Players listed under `selected_position`.
    pub players: Vec<String>,

    pub selected_position: Option<String>,
    pub selected_player: Option<String>,

    /// Result of the last selection change.
    pub comparison: Option<Result<PlayerComparison, SelectionError>>,

    /// Whole-table aggregates (computed once per load).
    pub overview: Option<Overview>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    age_bins: usize,
    cache: TableCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            data_path: config.data_path.clone(),
            table: None,
            positions: Vec::new(),
            players: Vec::new(),
            selected_position: None,
            selected_player: None,
            comparison: None,
            overview: None,
            status_message: None,
            age_bins: config.age_bins,
            cache: TableCache::default(),
        }
    }

    /// Load `path` through the cache and make it the current table.
    pub fn load(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        match self.cache.get_or_load(path) {
            Ok(table) => self.set_table(table),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Drop the cached table and read `data_path` again.
    pub fn reload(&mut self) {
        self.cache.invalidate();
        let path = self.data_path.clone();
        self.load(&path);
    }

    /// Ingest a table, recompute aggregates and select the first position.
    pub fn set_table(&mut self, table: Arc<PlayerTable>) {
        self.positions = distinct_positions(&table);
        self.overview = Some(Overview::compute(&table, self.age_bins));
        self.table = Some(table);
        self.status_message = None;

        let first = self.positions.first().cloned();
        self.select_position(first);
    }

    /// Change the position; the player list follows and the first player of
    /// the new list becomes the selection.
    pub fn select_position(&mut self, position: Option<String>) {
        self.players = match (&self.table, &position) {
            (Some(table), Some(pos)) => players_for_position(table, pos),
            _ => Vec::new(),
        };
        self.selected_position = position;
        self.selected_player = self.players.first().cloned();
        self.recompute();
    }

    pub fn select_player(&mut self, name: String) {
        self.selected_player = Some(name);
        self.recompute();
    }

    /// Rebuild the comparison for the current selection.
    fn recompute(&mut self) {
        self.comparison = match (&self.table, &self.selected_position) {
            (Some(table), Some(position)) => {
                let result = match &self.selected_player {
                    Some(name) => PlayerComparison::build(table, position, name),
                    None => Err(SelectionError::UnknownPosition(position.clone())),
                };
                if let Err(e) = &result {
                    log::warn!("empty selection: {e}");
                }
                Some(result)
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::three_players;

    fn state() -> AppState {
        let mut state = AppState::default();
        state.set_table(Arc::new(three_players()));
        state
    }

    #[test]
    fn set_table_selects_first_position_and_player() {
        let state = state();
        assert_eq!(state.positions, vec!["GK", "FW"]);
        assert_eq!(state.selected_position.as_deref(), Some("GK"));
        assert_eq!(state.selected_player.as_deref(), Some("Gina"));
        assert!(matches!(state.comparison, Some(Ok(_))));
        assert!(state.overview.is_some());
    }

    #[test]
    fn changing_position_cascades_to_players() {
        let mut state = state();
        state.select_position(Some("FW".into()));
        assert_eq!(state.players, vec!["Faye", "Fran"]);
        assert_eq!(state.selected_player.as_deref(), Some("Faye"));

        state.select_player("Fran".into());
        let Some(Ok(cmp)) = &state.comparison else {
            panic!("expected a comparison");
        };
        assert_eq!(cmp.player.name, "Fran");
        assert_eq!(cmp.group_size, 2);
    }

    #[test]
    fn unknown_selection_surfaces_as_error_state() {
        let mut state = state();
        state.select_position(Some("MF".into()));
        assert!(state.players.is_empty());
        assert!(matches!(state.comparison, Some(Err(_))));

        state.select_position(Some("GK".into()));
        state.select_player("Nobody".into());
        assert!(matches!(
            state.comparison,
            Some(Err(SelectionError::UnknownPlayer { .. }))
        ));
    }

    #[test]
    fn failed_load_sets_status_message() {
        let mut state = AppState::default();
        state.load(Path::new("/definitely/not/here.csv"));
        assert!(state.table.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
    }
}
