//! Board persistence.
//!
//! Boards are stored as [`BoardRecord`]s: the identifier, the creation
//! time, and the grid encoded as a JSON matrix string. [`BoardStore`]
//! abstracts the backend; [`InMemoryBoardStore`] is the one shipped here.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use lifegrid_types::{Board, BoardId, Grid};

use crate::error::StoreError;

/// Storage-facing form of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    /// Board identifier.
    pub id: BoardId,
    /// Grid encoded as a JSON array of boolean rows.
    pub board_state: String,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
}

impl BoardRecord {
    /// Encode a board for storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the grid cannot be encoded.
    pub fn from_board(board: &Board) -> Result<Self, StoreError> {
        Ok(Self {
            id: board.id,
            board_state: serde_json::to_string(&board.board_state)?,
            created_at: board.created_at,
        })
    }

    /// Decode the stored grid back into a [`Board`].
    ///
    /// Decoding re-validates the grid shape, so a record that was edited
    /// into a ragged or empty matrix fails here instead of reaching the
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the stored JSON is not a
    /// valid grid.
    pub fn to_board(&self) -> Result<Board, StoreError> {
        let board_state: Grid = serde_json::from_str(&self.board_state)?;
        Ok(Board {
            id: self.id,
            board_state,
            created_at: self.created_at,
        })
    }
}

/// A backend that keeps board records by identifier.
///
/// Implementations must be safe to share between request handlers.
pub trait BoardStore: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the identifier is taken.
    fn insert(&self, record: BoardRecord) -> Result<(), StoreError>;

    /// Look up a record. `Ok(None)` means no such board.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn get(&self, id: BoardId) -> Result<Option<BoardRecord>, StoreError>;

    /// All records, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn list(&self) -> Result<Vec<BoardRecord>, StoreError>;
}

/// Process-local board store guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryBoardStore {
    boards: RwLock<BTreeMap<BoardId, BoardRecord>>,
}

impl InMemoryBoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        let boards = self
            .boards
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(boards.len())
    }

    /// Whether the store holds no boards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl BoardStore for InMemoryBoardStore {
    fn insert(&self, record: BoardRecord) -> Result<(), StoreError> {
        let mut boards = self
            .boards
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        match boards.entry(record.id) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, id: BoardId) -> Result<Option<BoardRecord>, StoreError> {
        let boards = self
            .boards
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(boards.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<BoardRecord>, StoreError> {
        let boards = self
            .boards
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(boards.values().cloned().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn sample_board() -> Board {
        Board::new(Grid::parse("10\n01").unwrap())
    }

    #[test]
    fn record_encodes_grid_as_json_matrix() {
        let board = sample_board();
        let record = BoardRecord::from_board(&board).unwrap();
        assert_eq!(record.board_state, "[[true,false],[false,true]]");
        assert_eq!(record.to_board().unwrap(), board);
    }

    #[test]
    fn corrupt_record_fails_to_decode() {
        let mut record = BoardRecord::from_board(&sample_board()).unwrap();
        record.board_state = String::from("[[true,false],[true]]");
        assert!(matches!(
            record.to_board(),
            Err(StoreError::Serialization(_))
        ));

        record.board_state = String::from("not json");
        assert!(record.to_board().is_err());
    }

    #[test]
    fn insert_then_get() {
        let store = InMemoryBoardStore::new();
        let record = BoardRecord::from_board(&sample_board()).unwrap();
        store.insert(record.clone()).unwrap();
        assert_eq!(store.get(record.id).unwrap(), Some(record));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn get_unknown_is_none() {
        let store = InMemoryBoardStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.get(BoardId::from(Uuid::nil())).unwrap(), None);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = InMemoryBoardStore::new();
        let record = BoardRecord::from_board(&sample_board()).unwrap();
        store.insert(record.clone()).unwrap();
        let err = store.insert(record.clone());
        assert!(matches!(err, Err(StoreError::Duplicate(id)) if id == record.id));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn list_is_in_id_order() {
        let store = InMemoryBoardStore::new();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let record = BoardRecord::from_board(&sample_board()).unwrap();
            ids.push(record.id);
            store.insert(record).unwrap();
        }
        ids.sort();
        let listed: Vec<BoardId> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(listed, ids);
    }
}
