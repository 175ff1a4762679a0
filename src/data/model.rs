use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as produced by the CSV / JSON / Parquet loaders.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell. NaN and infinities count as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Textual view of the cell; `Null` and blank strings are missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::String(s) if s.trim().is_empty() => None,
            CellValue::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric – the ten performance indices
// ---------------------------------------------------------------------------

pub const METRIC_COUNT: usize = 10;

/// Performance indices compared on the radar chart, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Matches,
    Conditional,
    GoalInvolvement,
    Passing,
    TechnicalSkills,
    Offensive,
    Defensive,
    Performance,
    ExpectedPerformance,
    Scouting,
}

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Matches,
        Metric::Conditional,
        Metric::GoalInvolvement,
        Metric::Passing,
        Metric::TechnicalSkills,
        Metric::Offensive,
        Metric::Defensive,
        Metric::Performance,
        Metric::ExpectedPerformance,
        Metric::Scouting,
    ];

    /// Position of the metric in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name in the source table (spelling and casing as published).
    pub fn label(self) -> &'static str {
        match self {
            Metric::Matches => "Matches Index",
            Metric::Conditional => "Conditional index",
            Metric::GoalInvolvement => "Goal Involment Index",
            Metric::Passing => "Passing Index",
            Metric::TechnicalSkills => "Technical Skills Index",
            Metric::Offensive => "Offensive Index",
            Metric::Defensive => "Defensive index",
            Metric::Performance => "Performance Index",
            Metric::ExpectedPerformance => "xPerformance Index",
            Metric::Scouting => "Scouting Index",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Matches => "Participation and influence in matches played.",
            Metric::Conditional => "Performance under specific match conditions.",
            Metric::GoalInvolvement => "Direct and indirect involvement in goals.",
            Metric::Passing => "Passing accuracy and quality.",
            Metric::TechnicalSkills => "Overall technical ability of the player.",
            Metric::Offensive => "Offensive contribution to the team.",
            Metric::Defensive => "Performance in defensive duties.",
            Metric::Performance => "Overall performance rating.",
            Metric::ExpectedPerformance => {
                "Expected performance or potential according to advanced data."
            }
            Metric::Scouting => "Score based on scouting criteria for a transfer.",
        }
    }
}

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub mod columns {
    pub const PLAYER_NAME: &str = "Player Name";
    pub const POSITION: &str = "Position";
    pub const AGE: &str = "Age";
    pub const TEAM: &str = "Team";
    pub const NATIONALITY: &str = "Nationship";
    pub const PHOTO: &str = "Photo";
    pub const PROFILE: &str = "Profile Main Characteristic";
    pub const MARKET_VALUE: &str = "Market Value (M)";
}

/// Columns that must be present for the dashboard to work.
pub fn required_columns() -> Vec<&'static str> {
    let mut cols = vec![
        columns::PLAYER_NAME,
        columns::POSITION,
        columns::AGE,
        columns::TEAM,
        columns::MARKET_VALUE,
    ];
    cols.extend(Metric::ALL.iter().map(|m| m.label()));
    cols
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("the table has no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Selection key; not guaranteed unique across the table.
    pub name: String,
    pub position: Option<String>,
    pub age: Option<f64>,
    pub team: Option<String>,
    pub nationality: Option<String>,
    /// Image URL or local path.
    pub photo: Option<String>,
    pub profile: Option<String>,
    /// Market value in millions.
    pub market_value: Option<f64>,
    pub metrics: [Option<f64>; METRIC_COUNT],
}

impl PlayerRecord {
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics[metric.index()]
    }
}

// ---------------------------------------------------------------------------
// PlayerTable – the complete loaded dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PlayerTable {
    /// Records in source order.
    pub players: Vec<PlayerRecord>,
    /// Column names as found in the source file.
    pub column_names: Vec<String>,
}

impl PlayerTable {
    /// Build typed records from raw loader rows.
    pub fn from_rows(
        column_names: Vec<String>,
        rows: Vec<BTreeMap<String, CellValue>>,
    ) -> Result<Self, TableError> {
        let present: BTreeSet<&str> = column_names.iter().map(String::as_str).collect();
        if let Some(missing) = required_columns().into_iter().find(|c| !present.contains(c)) {
            return Err(TableError::MissingColumn {
                column: missing.to_string(),
            });
        }
        if rows.is_empty() {
            return Err(TableError::Empty);
        }

        let players = rows
            .iter()
            .enumerate()
            .map(|(row_no, row)| record_from_row(row_no, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlayerTable {
            players,
            column_names,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn record_from_row(
    row_no: usize,
    row: &BTreeMap<String, CellValue>,
) -> Result<PlayerRecord, TableError> {
    let text = |col: &str| row.get(col).and_then(CellValue::as_text);

    let mut metrics = [None; METRIC_COUNT];
    for metric in Metric::ALL {
        metrics[metric.index()] = number(row_no, row, metric.label())?;
    }

    Ok(PlayerRecord {
        name: text(columns::PLAYER_NAME).unwrap_or_default(),
        position: text(columns::POSITION),
        age: number(row_no, row, columns::AGE)?,
        team: text(columns::TEAM),
        nationality: text(columns::NATIONALITY),
        photo: text(columns::PHOTO),
        profile: text(columns::PROFILE),
        market_value: number(row_no, row, columns::MARKET_VALUE)?,
        metrics,
    })
}

/// Read a numeric cell. Empty and NaN cells are missing, text is an error.
fn number(
    row_no: usize,
    row: &BTreeMap<String, CellValue>,
    column: &str,
) -> Result<Option<f64>, TableError> {
    match row.get(column) {
        None | Some(CellValue::Null) => Ok(None),
        Some(cell @ (CellValue::Integer(_) | CellValue::Float(_))) => Ok(cell.as_f64()),
        Some(CellValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(other) => Err(TableError::InvalidNumber {
            row: row_no,
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}
