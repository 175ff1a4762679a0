use std::collections::BTreeSet;

use super::model::{PlayerRecord, PlayerTable};

// ---------------------------------------------------------------------------
// Equality filters over the player table
// ---------------------------------------------------------------------------

/// Distinct position values in first-occurrence order. Rows without a
/// position or without a name are skipped, so every listed position has at
/// least one selectable player.
pub fn distinct_positions(table: &PlayerTable) -> Vec<String> {
    distinct(
        table
            .players
            .iter()
            .filter(|p| !p.name.is_empty())
            .filter_map(|p| p.position.as_deref()),
    )
}

/// Distinct player names among rows whose position equals `position`, in
/// first-occurrence order.
pub fn players_for_position(table: &PlayerTable, position: &str) -> Vec<String> {
    distinct(
        in_position(table, position)
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty()),
    )
}

/// First row whose name equals `name`.
pub fn select_player<'a>(table: &'a PlayerTable, name: &str) -> Option<&'a PlayerRecord> {
    table.players.iter().find(|p| p.name == name)
}

/// First row in `position` whose name equals `name`.
///
/// Duplicate names in other positions never shadow the one listed under the
/// selected position.
pub fn select_player_in_position<'a>(
    table: &'a PlayerTable,
    position: &str,
    name: &str,
) -> Option<&'a PlayerRecord> {
    in_position(table, position).find(|p| p.name == name)
}

/// All rows sharing `position`, in source order.
pub fn position_group<'a>(table: &'a PlayerTable, position: &str) -> Vec<&'a PlayerRecord> {
    in_position(table, position).collect()
}

fn in_position<'a: 'b, 'b>(
    table: &'a PlayerTable,
    position: &'b str,
) -> impl Iterator<Item = &'a PlayerRecord> + 'b {
    table
        .players
        .iter()
        .filter(move |p| p.position.as_deref() == Some(position))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{HEADER, table_from, three_players};

    #[test]
    fn positions_keep_first_occurrence_order() {
        let table = three_players();
        assert_eq!(distinct_positions(&table), vec!["GK", "FW"]);
    }

    #[test]
    fn players_are_restricted_to_position() {
        let table = three_players();
        assert_eq!(players_for_position(&table, "FW"), vec!["Faye", "Fran"]);
        assert_eq!(players_for_position(&table, "GK"), vec!["Gina"]);
        for pos in distinct_positions(&table) {
            for name in players_for_position(&table, &pos) {
                let p = select_player_in_position(&table, &pos, &name).unwrap();
                assert_eq!(p.position.as_deref(), Some(pos.as_str()));
            }
        }
    }

    #[test]
    fn unknown_position_yields_nothing() {
        let table = three_players();
        assert!(players_for_position(&table, "MF").is_empty());
        assert!(position_group(&table, "MF").is_empty());
        assert!(!distinct_positions(&table).contains(&"MF".to_string()));
    }

    #[test]
    fn matching_is_exact() {
        let table = three_players();
        assert!(players_for_position(&table, "fw").is_empty());
        assert!(select_player(&table, "faye").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_match() {
        let data = format!(
            "{HEADER}\n\
Sam,DF,20,A,,,,1,1,1,1,1,1,1,1,1,1,1\n\
Sam,FW,28,B,,,,2,2,2,2,2,2,2,2,2,2,2\n\
Sam,FW,33,C,,,,3,3,3,3,3,3,3,3,3,3,3\n"
        );
        let table = table_from(&data);
        assert_eq!(select_player(&table, "Sam").unwrap().team.as_deref(), Some("A"));
        let fw = select_player_in_position(&table, "FW", "Sam").unwrap();
        assert_eq!(fw.team.as_deref(), Some("B"));
        assert_eq!(players_for_position(&table, "FW"), vec!["Sam"]);
    }

    #[test]
    fn listed_positions_always_have_players() {
        let data = format!(
            "{HEADER}\n\
,GK,20,A,,,,1,1,1,1,1,1,1,1,1,1,1\n\
Max,MF,28,B,,,,2,2,2,2,2,2,2,2,2,2,2\n\
,MF,30,C,,,,3,3,3,3,3,3,3,3,3,3,3\n"
        );
        let table = table_from(&data);
        let positions = distinct_positions(&table);
        assert_eq!(positions, vec!["MF"]);
        for pos in ["GK", "MF", "FW"] {
            assert_eq!(
                !players_for_position(&table, pos).is_empty(),
                positions.iter().any(|p| p == pos),
                "position {pos}"
            );
        }
        // Unnamed rows still belong to the group being averaged.
        assert_eq!(position_group(&table, "MF").len(), 2);
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(distinct(values.into_iter()), vec!["b", "a", "c"]);
    }

    #[test]
    fn rows_without_position_are_skipped() {
        let data = format!(
            "{HEADER}\n\
Lou,,20,A,,,,1,1,1,1,1,1,1,1,1,1,1\n\
Max,MF,28,B,,,,2,2,2,2,2,2,2,2,2,2,2\n"
        );
        let table = table_from(&data);
        assert_eq!(distinct_positions(&table), vec!["MF"]);
    }
}
