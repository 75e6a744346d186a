//! # Lauta Core
//!
//! Core board state and drag-and-drop domain logic for Lauta kanban boards.
//!
//! This crate provides the fundamental types and operations for managing
//! board columns and items without any dependency on a specific UI toolkit
//! or drag-and-drop engine. Front ends own gesture detection and pixels;
//! the board owns the data and consumes the terminal drop events.

pub mod dnd;
pub mod domain;
pub mod error;
pub mod view;

// Re-export commonly used types
pub use dnd::{DragLocation, DragSnapshot, DropResult};
pub use domain::{
    board::{Board, BoardConfig, ColumnConfig, MutationOutcome, NoopReason},
    column::{Column, ColumnId},
    item::{generate_items, Item, ItemId},
};
pub use error::{LautaError, Result};
pub use view::{BoardView, ColumnView, ItemView};
