use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::Action;

/// One persisted state row: the box counts and every recorded action value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTableEntry {
    pub state: Vec<u32>,
    pub actions: Vec<ActionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: f64,
}

/// Tabular action-value store with a default of 0.0 for any unseen
/// (state, action) pair.
///
/// Reads never create entries; only `set` inserts. Cloning produces a fully
/// independent table, which is how self-play snapshots a frozen opponent.
///
/// Serializes as a sorted list of state rows rather than a map, since JSON
/// object keys must be strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<QTableEntry>", from = "Vec<QTableEntry>")]
pub struct QTable {
    values: HashMap<Vec<u32>, HashMap<Action, f64>>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored estimate for `(state, action)`, or 0.0 if never set.
    pub fn get(&self, state: &[u32], action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, state: &[u32], action: Action, value: f64) {
        self.values
            .entry(state.to_vec())
            .or_default()
            .insert(action, value);
    }

    /// Number of states with at least one recorded action value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<QTable> for Vec<QTableEntry> {
    fn from(table: QTable) -> Self {
        let mut entries: Vec<QTableEntry> = table
            .values
            .into_iter()
            .map(|(state, row)| {
                let mut actions: Vec<ActionValue> = row
                    .into_iter()
                    .map(|(action, value)| ActionValue { action, value })
                    .collect();
                actions.sort_by_key(|av| av.action);
                QTableEntry { state, actions }
            })
            .collect();
        entries.sort_by(|a, b| a.state.cmp(&b.state));
        entries
    }
}

impl From<Vec<QTableEntry>> for QTable {
    fn from(entries: Vec<QTableEntry>) -> Self {
        let mut table = QTable::new();
        for entry in entries {
            for av in entry.actions {
                table.set(&entry.state, av.action, av.value);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_pair_reads_zero() {
        let table = QTable::new();
        assert_eq!(table.get(&[3, 2, 1], Action::new(1, 1)), 0.0);
    }

    #[test]
    fn test_read_does_not_create_entries() {
        let table = QTable::new();
        table.get(&[5], Action::new(1, 5));
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut table = QTable::new();
        table.set(&[2, 2], Action::new(2, 1), -0.25);
        assert_eq!(table.get(&[2, 2], Action::new(2, 1)), -0.25);
        assert_eq!(table.get(&[2, 2], Action::new(2, 2)), 0.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut table = QTable::new();
        table.set(&[1, 1], Action::new(1, 1), 1.0);

        let snapshot = table.clone();
        table.set(&[1, 1], Action::new(1, 1), -9.0);
        table.set(&[4], Action::new(1, 4), 2.0);

        assert_eq!(snapshot.get(&[1, 1], Action::new(1, 1)), 1.0);
        assert_eq!(snapshot.get(&[4], Action::new(1, 4)), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut table = QTable::new();
        table.set(&[3, 0, 1], Action::new(1, 2), 0.125);
        table.set(&[3, 0, 1], Action::new(3, 1), -1.0);
        table.set(&[1], Action::new(1, 1), 0.7071067811865476);

        let json = serde_json::to_string(&table).unwrap();
        let restored: QTable = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.get(&[3, 0, 1], Action::new(1, 2)), 0.125);
        assert_eq!(restored.get(&[3, 0, 1], Action::new(3, 1)), -1.0);
        assert_eq!(restored.get(&[1], Action::new(1, 1)), 0.7071067811865476);
        // default-0 reads survive the round trip
        assert_eq!(restored.get(&[3, 0, 1], Action::new(1, 3)), 0.0);
        assert_eq!(restored.get(&[9, 9], Action::new(1, 1)), 0.0);
    }

    #[test]
    fn test_serialized_entries_are_sorted() {
        let mut table = QTable::new();
        table.set(&[2], Action::new(1, 2), 0.5);
        table.set(&[1], Action::new(1, 1), 0.5);
        table.set(&[2], Action::new(1, 1), 0.5);

        let entries: Vec<QTableEntry> = table.into();
        assert_eq!(entries[0].state, vec![1]);
        assert_eq!(entries[1].state, vec![2]);
        assert_eq!(entries[1].actions[0].action, Action::new(1, 1));
        assert_eq!(entries[1].actions[1].action, Action::new(1, 2));
    }
}
