use crate::domain::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a column (e.g., column1, column2)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    const PREFIX: &'static str = "column";

    /// Creates a ColumnId from a counter
    pub fn new(counter: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::LautaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::PREFIX) {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self(s.to_string()))
            }
            _ => Err(crate::error::LautaError::InvalidColumnId(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered list of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub items: Vec<Item>,
    /// Monotonic counter backing generated item ids; never decreases
    pub next_item_number: u32,
}

impl Column {
    /// Creates a new empty column
    pub fn new(id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            next_item_number: 0,
        }
    }

    /// Creates a column pre-filled with the given items
    ///
    /// The item counter starts past the seed so later generated ids continue
    /// the sequence.
    pub fn seeded(id: ColumnId, name: impl Into<String>, items: Vec<Item>) -> Self {
        let next_item_number = items.len() as u32;
        Self {
            id,
            name: name.into(),
            items,
            next_item_number,
        }
    }

    /// Appends a generated item, deriving its id and content from the item
    /// counter and this column's board position
    pub fn push_generated(&mut self, column_index: usize) -> ItemId {
        let k = self.next_item_number;
        self.next_item_number += 1;

        let id = ItemId::new(k, column_index);
        self.items
            .push(Item::new(id.clone(), format!("Item {}{}", k, column_index)));
        id
    }

    /// Removes and returns the item at `index`, if in range
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Inserts `item` at `index`, clamped to the end of the sequence
    pub fn insert_item(&mut self, index: usize, item: Item) {
        let at = index.min(self.items.len());
        self.items.insert(at, item);
    }
}
