use thiserror::Error;

use super::metrics::MetricVector;
use super::normalize::{NormalizedPair, normalize};
use super::radar::RadarTrace;
use crate::data::filter::{position_group, select_player_in_position};
use crate::data::model::{PlayerRecord, PlayerTable};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("no players found for position '{0}'")]
    UnknownPosition(String),

    #[error("no player named '{name}' in position '{position}'")]
    UnknownPlayer { position: String, name: String },
}

// ---------------------------------------------------------------------------
// PlayerComparison – everything the profile section renders
// ---------------------------------------------------------------------------

/// One player against the average of their position group.
#[derive(Debug, Clone)]
pub struct PlayerComparison {
    pub player: PlayerRecord,
    pub position: String,
    pub group_size: usize,
    /// Raw values, shown in the comparison table.
    pub player_metrics: MetricVector,
    pub average_metrics: MetricVector,
    /// Scaled values, shown on the radar.
    pub normalized: NormalizedPair,
    pub player_trace: RadarTrace,
    pub average_trace: RadarTrace,
}

impl PlayerComparison {
    pub fn build(
        table: &PlayerTable,
        position: &str,
        name: &str,
    ) -> Result<Self, SelectionError> {
        let group = position_group(table, position);
        if group.is_empty() {
            return Err(SelectionError::UnknownPosition(position.to_string()));
        }
        let player = select_player_in_position(table, position, name).ok_or_else(|| {
            SelectionError::UnknownPlayer {
                position: position.to_string(),
                name: name.to_string(),
            }
        })?;

        let player_metrics = MetricVector::from_record(player);
        let average_metrics = MetricVector::mean_of(&group);
        let normalized = normalize(&player_metrics, &average_metrics);

        Ok(Self {
            player: player.clone(),
            position: position.to_string(),
            group_size: group.len(),
            player_metrics,
            average_metrics,
            player_trace: RadarTrace::from_vector(&normalized.player),
            average_trace: RadarTrace::from_vector(&normalized.average),
            normalized,
        })
    }
}
