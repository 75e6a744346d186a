use crate::dnd::DropResult;
use crate::domain::column::{Column, ColumnId};
use crate::domain::item::generate_items;
use crate::error::{LautaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Configuration for one starting column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    pub seed_items: usize,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed_items: 0,
        }
    }

    pub fn with_seed_items(mut self, count: usize) -> Self {
        self.seed_items = count;
        self
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    /// An empty board; every column is added interactively
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            columns: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// The two-column demo fixture: column1 pre-filled with ten seed items,
    /// column2 empty
    pub fn proof_of_concept() -> Self {
        Self {
            name: "Proof of Concept".to_string(),
            columns: vec![
                ColumnConfig::new("Column 1").with_seed_items(10),
                ColumnConfig::new("Column 2"),
            ],
        }
    }
}

/// Result of a board mutation
///
/// Mutations either replace the board state or report why they changed
/// nothing; they never fail and never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The board state was replaced with a new snapshot
    Applied,
    /// Nothing happened; the reason distinguishes invalid input from
    /// inherently empty operations like a cancelled drop
    Skipped(NoopReason),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a mutation left the board untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoopReason {
    /// The drag gesture ended outside any droppable column
    DropCancelled,
    /// `add_item` was asked for a column position that does not exist
    ColumnIndexOutOfRange(usize),
    /// The drop's source column id resolved to no column
    UnknownSourceColumn(ColumnId),
    /// The drop's destination column id resolved to no column
    UnknownDestinationColumn(ColumnId),
    /// The drop's source index pointed past the end of the source column
    SourceIndexOutOfRange { column: ColumnId, index: usize },
}

/// Kanban board state
///
/// The column sequence is held behind an `Arc` and replaced wholesale on
/// every applied mutation: readers that took a [`Board::snapshot`] keep a
/// fully-formed, consistent view while the board moves on. A skipped
/// mutation swaps nothing, so the state is left referentially unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub config: BoardConfig,
    columns: Arc<Vec<Column>>,
    next_column_number: u32,
}

impl Board {
    /// Creates a board from a configuration, building its starting columns
    pub fn new(config: BoardConfig) -> Self {
        let mut next_column_number = 1;
        let mut columns = Vec::with_capacity(config.columns.len());

        for column_config in &config.columns {
            let id = ColumnId::new(next_column_number);
            next_column_number += 1;
            columns.push(Column::seeded(
                id,
                column_config.name.clone(),
                generate_items(column_config.seed_items),
            ));
        }

        Self {
            config,
            columns: Arc::new(columns),
            next_column_number,
        }
    }

    /// The current column sequence
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// A cheap snapshot of the current state
    ///
    /// The snapshot stays valid and unchanged across later mutations.
    pub fn snapshot(&self) -> Arc<Vec<Column>> {
        Arc::clone(&self.columns)
    }

    /// Total number of items across all columns
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }

    /// Position of the column with the given id, by linear scan over the
    /// column sequence
    pub fn find_column(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Appends a new empty column with a generated id and name
    pub fn add_column(&mut self) -> ColumnId {
        let n = self.next_column_number;
        self.next_column_number += 1;

        let id = ColumnId::new(n);
        let column = Column::new(id.clone(), format!("Column {}", n));

        let mut columns = Vec::clone(&self.columns);
        columns.push(column);
        self.columns = Arc::new(columns);

        tracing::debug!(column = %id, "column added");
        id
    }

    /// Appends a generated item to the column at `column_index`
    ///
    /// An out-of-range index changes nothing; the outcome says so.
    pub fn add_item(&mut self, column_index: usize) -> MutationOutcome {
        if column_index >= self.columns.len() {
            tracing::debug!(column_index, "add_item skipped: no such column");
            return MutationOutcome::Skipped(NoopReason::ColumnIndexOutOfRange(column_index));
        }

        let mut columns = Vec::clone(&self.columns);
        let id = columns[column_index].push_generated(column_index);
        self.columns = Arc::new(columns);

        tracing::debug!(item = %id, column_index, "item added");
        MutationOutcome::Applied
    }

    /// Relocates one item from a source position to a destination position,
    /// possibly across columns
    ///
    /// The removal happens before the insertion, so for a same-column move
    /// the destination index is interpreted against the column after
    /// removal. A destination index past the end clamps to the end. Exactly
    /// one item is relocated; all other items keep their relative order.
    pub fn move_item(
        &mut self,
        source_column: &ColumnId,
        source_index: usize,
        destination_column: &ColumnId,
        destination_index: usize,
    ) -> MutationOutcome {
        let Some(source_pos) = self.find_column(source_column) else {
            tracing::warn!(column = %source_column, "move skipped: unknown source column");
            return MutationOutcome::Skipped(NoopReason::UnknownSourceColumn(
                source_column.clone(),
            ));
        };
        let Some(destination_pos) = self.find_column(destination_column) else {
            tracing::warn!(column = %destination_column, "move skipped: unknown destination column");
            return MutationOutcome::Skipped(NoopReason::UnknownDestinationColumn(
                destination_column.clone(),
            ));
        };

        let mut columns = Vec::clone(&self.columns);
        let Some(item) = columns[source_pos].take_item(source_index) else {
            tracing::warn!(
                column = %source_column,
                source_index,
                "move skipped: source index out of range"
            );
            return MutationOutcome::Skipped(NoopReason::SourceIndexOutOfRange {
                column: source_column.clone(),
                index: source_index,
            });
        };

        columns[destination_pos].insert_item(destination_index, item);
        self.columns = Arc::new(columns);

        tracing::debug!(
            from = %source_column,
            to = %destination_column,
            "item moved"
        );
        MutationOutcome::Applied
    }

    /// Consumes the collaborator's terminal drop event
    ///
    /// A drop with no destination is a cancelled gesture and changes nothing.
    pub fn apply_drop(&mut self, drop: &DropResult) -> MutationOutcome {
        let Some(destination) = &drop.destination else {
            return MutationOutcome::Skipped(NoopReason::DropCancelled);
        };

        self.move_item(
            &drop.source.column,
            drop.source.index,
            &destination.column,
            destination.index,
        )
    }

    /// Checks the board-wide id uniqueness invariants
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut item_ids = HashSet::new();

        for column in self.columns.iter() {
            if !column_ids.insert(column.id.as_str()) {
                return Err(LautaError::DuplicateColumnId(column.id.to_string()));
            }
            for item in &column.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(LautaError::DuplicateItemId(item.id.to_string()));
                }
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::DragLocation;
    use std::str::FromStr;

    fn column_id(s: &str) -> ColumnId {
        ColumnId::from_str(s).unwrap()
    }

    /// Three items in column1, empty column2
    fn two_column_board() -> Board {
        Board::new(BoardConfig {
            name: "Test Board".to_string(),
            columns: vec![
                ColumnConfig::new("Column 1").with_seed_items(3),
                ColumnConfig::new("Column 2"),
            ],
        })
    }

    #[test]
    fn test_add_column_on_empty_board() {
        let mut board = Board::default();

        let id = board.add_column();

        assert_eq!(id.as_str(), "column1");
        assert_eq!(board.columns().len(), 1);
        assert_eq!(board.columns()[0].id.as_str(), "column1");
        assert_eq!(board.columns()[0].name, "Column 1");
        assert!(board.columns()[0].items.is_empty());
    }

    #[test]
    fn test_add_column_preserves_existing_columns() {
        let mut board = two_column_board();
        let before = board.snapshot();

        let id = board.add_column();

        assert_eq!(id.as_str(), "column3");
        assert_eq!(board.columns().len(), 3);
        assert_eq!(&board.columns()[..2], &before[..]);
    }

    #[test]
    fn test_add_item_generates_reference_ids() {
        let mut board = Board::default();
        board.add_column();

        let outcome = board.add_item(0);

        assert!(outcome.is_applied());
        assert_eq!(board.columns()[0].items.len(), 1);
        assert_eq!(board.columns()[0].items[0].id.as_str(), "item00");
        assert_eq!(board.columns()[0].items[0].content, "Item 00");
    }

    #[test]
    fn test_add_item_uses_column_position() {
        let mut board = Board::default();
        board.add_column();
        board.add_column();

        let outcome = board.add_item(1);

        assert!(outcome.is_applied());
        assert_eq!(board.columns()[1].items[0].id.as_str(), "item01");
        assert!(board.columns()[0].items.is_empty());
    }

    #[test]
    fn test_add_item_out_of_range_is_noop() {
        let mut board = Board::default();
        let before = board.snapshot();

        let outcome = board.add_item(0);

        assert_eq!(
            outcome,
            MutationOutcome::Skipped(NoopReason::ColumnIndexOutOfRange(0))
        );
        assert!(Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_move_across_columns() {
        let mut board = two_column_board();

        let outcome = board.move_item(&column_id("column1"), 0, &column_id("column2"), 0);

        assert!(outcome.is_applied());
        let ids: Vec<&str> = board.columns()[0]
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, ["item1", "item2"]);
        assert_eq!(board.columns()[1].items[0].id.as_str(), "item0");
        assert_eq!(board.columns()[1].items[0].content, "Item 0");
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_same_column_reorder() {
        let mut board = two_column_board();

        // Index 2 is interpreted after item0 is removed, so item0 lands last.
        let outcome = board.move_item(&column_id("column1"), 0, &column_id("column1"), 2);

        assert!(outcome.is_applied());
        let ids: Vec<&str> = board.columns()[0]
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, ["item1", "item2", "item0"]);
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_reorder_leaves_other_columns_untouched() {
        let mut board = two_column_board();
        board.add_item(1);
        let other_before = board.columns()[1].clone();

        board.move_item(&column_id("column1"), 2, &column_id("column1"), 0);

        assert_eq!(board.columns()[1], other_before);
    }

    #[test]
    fn test_move_preserves_identity_and_total_count() {
        let mut board = two_column_board();
        let moved = board.columns()[0].items[1].clone();

        board.move_item(&column_id("column1"), 1, &column_id("column2"), 0);

        assert_eq!(board.item_count(), 3);
        assert_eq!(board.columns()[1].items[0], moved);
    }

    #[test]
    fn test_move_destination_index_clamps_to_end() {
        let mut board = two_column_board();

        let outcome = board.move_item(&column_id("column1"), 1, &column_id("column2"), 99);

        assert!(outcome.is_applied());
        assert_eq!(board.columns()[1].items.len(), 1);
        assert_eq!(board.columns()[1].items[0].id.as_str(), "item1");
    }

    #[test]
    fn test_move_unknown_source_column_is_noop() {
        let mut board = two_column_board();
        let before = board.snapshot();

        let outcome = board.move_item(&column_id("column99"), 0, &column_id("column2"), 0);

        assert_eq!(
            outcome,
            MutationOutcome::Skipped(NoopReason::UnknownSourceColumn(column_id("column99")))
        );
        assert!(Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_move_unknown_destination_column_is_noop() {
        let mut board = two_column_board();
        let before = board.snapshot();

        let outcome = board.move_item(&column_id("column1"), 0, &column_id("column99"), 0);

        assert_eq!(
            outcome,
            MutationOutcome::Skipped(NoopReason::UnknownDestinationColumn(column_id("column99")))
        );
        assert!(Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_move_source_index_out_of_range_is_noop() {
        let mut board = two_column_board();
        let before = board.snapshot();

        let outcome = board.move_item(&column_id("column1"), 7, &column_id("column2"), 0);

        assert_eq!(
            outcome,
            MutationOutcome::Skipped(NoopReason::SourceIndexOutOfRange {
                column: column_id("column1"),
                index: 7,
            })
        );
        assert!(Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_cancelled_drop_leaves_state_referentially_unchanged() {
        let mut board = two_column_board();
        let before = board.snapshot();

        let drop = DropResult::cancelled(DragLocation::new(column_id("column1"), 0));
        let outcome = board.apply_drop(&drop);

        assert_eq!(outcome, MutationOutcome::Skipped(NoopReason::DropCancelled));
        assert!(Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_completed_drop_moves_item() {
        let mut board = two_column_board();

        let drop = DropResult::completed(
            DragLocation::new(column_id("column1"), 2),
            DragLocation::new(column_id("column2"), 0),
        );
        let outcome = board.apply_drop(&drop);

        assert!(outcome.is_applied());
        assert_eq!(board.columns()[0].items.len(), 2);
        assert_eq!(board.columns()[1].items[0].id.as_str(), "item2");
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut board = two_column_board();
        let before = board.snapshot();

        board.move_item(&column_id("column1"), 0, &column_id("column2"), 0);
        board.add_column();

        // The old snapshot still describes the pre-mutation board.
        assert_eq!(before.len(), 2);
        assert_eq!(before[0].items.len(), 3);
        assert_eq!(before[1].items.len(), 0);
        assert!(!Arc::ptr_eq(&before, &board.snapshot()));
    }

    #[test]
    fn test_proof_of_concept_board() {
        let board = Board::new(BoardConfig::proof_of_concept());

        assert_eq!(board.columns().len(), 2);
        assert_eq!(board.columns()[0].id.as_str(), "column1");
        assert_eq!(board.columns()[1].id.as_str(), "column2");
        assert_eq!(board.columns()[0].items.len(), 10);
        assert!(board.columns()[1].items.is_empty());
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_seeded_board_continues_item_sequence() {
        let mut board = Board::new(BoardConfig::proof_of_concept());

        board.add_item(0);

        assert_eq!(board.columns()[0].items[10].id.as_str(), "item100");
        assert_eq!(board.columns()[0].items[10].content, "Item 100");
    }

    #[test]
    fn test_validate_detects_duplicate_item_ids() {
        // Seeding two columns reuses the bare seed ids, which is exactly the
        // collision the validation exists to surface.
        let board = Board::new(BoardConfig {
            name: "Clashing".to_string(),
            columns: vec![
                ColumnConfig::new("Column 1").with_seed_items(1),
                ColumnConfig::new("Column 2").with_seed_items(1),
            ],
        });

        assert!(matches!(
            board.validate(),
            Err(LautaError::DuplicateItemId(_))
        ));
    }

    #[test]
    fn test_generated_ids_stay_unique_across_interactive_use() {
        let mut board = Board::default();
        board.add_column();
        board.add_column();
        for _ in 0..3 {
            board.add_item(0);
            board.add_item(1);
        }

        board.move_item(&column_id("column1"), 0, &column_id("column2"), 1);

        assert!(board.validate().is_ok());
        assert_eq!(board.item_count(), 6);
    }

    #[test]
    fn test_board_serde_round_trip() {
        let mut board = Board::new(BoardConfig::proof_of_concept());
        board.add_item(1);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.columns(), board.columns());
        assert_eq!(restored.config, board.config);

        // Counters survive, so restored boards keep generating fresh ids.
        let mut restored = restored;
        restored.add_column();
        assert_eq!(restored.columns()[2].id.as_str(), "column3");
    }
}
