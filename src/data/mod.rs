/// Data layer: core types, loading, caching and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PlayerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  read once, share Arc<PlayerTable>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  position / player equality predicates
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::loader::load_csv_reader;
    use super::model::PlayerTable;

    pub const HEADER: &str = "Player Name,Position,Age,Team,Nationship,Photo,\
Profile Main Characteristic,Market Value (M),Matches Index,Conditional index,\
Goal Involment Index,Passing Index,Technical Skills Index,Offensive Index,\
Defensive index,Performance Index,xPerformance Index,Scouting Index";

    /// Two positions, three players. The FW rows are hand-averaged in tests.
    pub fn three_players() -> PlayerTable {
        let data = format!(
            "{HEADER}\n\
Gina,GK,31,Blues,Italy,,Reflexes,4,5,5,5,5,5,5,5,5,5,5\n\
Faye,FW,22,Reds,Spain,,Finisher,20,2,4,6,8,10,12,14,16,18,20\n\
Fran,FW,26,Reds,France,,Dribbler,10,4,6,8,10,12,14,16,18,20,40\n"
        );
        table_from(&data)
    }

    pub fn table_from(csv: &str) -> PlayerTable {
        load_csv_reader(csv.as_bytes()).expect("fixture should parse")
    }
}
