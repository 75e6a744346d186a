//! Read-only render model for the board.
//!
//! The rendering surface re-renders synchronously from a [`BoardView`] on
//! every state change: an add-column control at the root, a name label and
//! an add-item control per column, a draggable block per item. Drag
//! highlights come from the collaborator's [`DragSnapshot`] and exist only
//! in the view; they are never written back into the board.

use crate::dnd::DragSnapshot;
use crate::domain::{Board, ColumnId, ItemId};
use serde::Serialize;

/// One draggable item block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Drag handle key; stable across re-renders
    pub id: ItemId,
    pub content: String,
    /// Position reported to the collaborator when a drag starts here
    pub index: usize,
    /// True while this item is mid-drag
    pub is_dragging: bool,
}

/// One droppable column region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Droppable region key
    pub id: ColumnId,
    /// Name label text
    pub name: String,
    /// What the per-column add-item control feeds back into
    /// [`Board::add_item`]
    pub column_index: usize,
    /// True while a dragged item hovers over this column
    pub is_drop_target: bool,
    pub items: Vec<ItemView>,
}

/// The full re-render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Builds the render tree for the current board state and gesture flags
    pub fn build(board: &Board, drag: &DragSnapshot) -> Self {
        let columns = board
            .columns()
            .iter()
            .enumerate()
            .map(|(column_index, column)| ColumnView {
                id: column.id.clone(),
                name: column.name.clone(),
                column_index,
                is_drop_target: drag.is_over(&column.id),
                items: column
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| ItemView {
                        id: item.id.clone(),
                        content: item.content.clone(),
                        index,
                        is_dragging: drag.is_dragging(&item.id),
                    })
                    .collect(),
            })
            .collect();

        Self {
            name: board.config.name.clone(),
            columns,
        }
    }
}
