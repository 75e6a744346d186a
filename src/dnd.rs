//! Wire records exchanged with the drag-and-drop front end.
//!
//! The board never detects gestures itself. A front end owns the drag
//! state machine and reports two things back: the terminal drop of a
//! completed gesture, and transient mid-drag flags the render layer styles
//! from.

use crate::domain::{ColumnId, ItemId};
use serde::{Deserialize, Serialize};

/// A position within the board: a droppable column plus an index inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: ColumnId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// The terminal event of a drag gesture
///
/// `destination` is absent when the gesture was cancelled, i.e. the item was
/// released outside any droppable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DropResult {
    /// A drop that landed on a valid target
    pub fn completed(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A drop released outside any column
    pub fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Transient flags for a gesture in flight
///
/// Render-only input; never stored into the board state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSnapshot {
    /// The item currently held by the pointer, if any
    pub dragging: Option<ItemId>,
    /// The column the held item is hovering over, if any
    pub over_column: Option<ColumnId>,
}

impl DragSnapshot {
    /// No gesture in flight
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self, item: &ItemId) -> bool {
        self.dragging.as_ref() == Some(item)
    }

    pub fn is_over(&self, column: &ColumnId) -> bool {
        self.over_column.as_ref() == Some(column)
    }
}
