pub mod board;
pub mod column;
pub mod item;

pub use board::{Board, BoardConfig, ColumnConfig, MutationOutcome, NoopReason};
pub use column::{Column, ColumnId};
pub use item::{generate_items, Item, ItemId};
