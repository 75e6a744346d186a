use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for an item (e.g., item00, item21, item103)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    const PREFIX: &'static str = "item";

    /// Creates an ItemId from a column's item counter and the column's board position
    pub fn new(counter: u32, column_index: usize) -> Self {
        Self(format!("{}{}{}", Self::PREFIX, counter, column_index))
    }

    /// Creates an ItemId from a bare counter, as seed items use
    pub fn seeded(counter: usize) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = crate::error::LautaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::PREFIX) {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self(s.to_string()))
            }
            _ => Err(crate::error::LautaError::InvalidItemId(s.to_string())),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An atomic unit of content that can be relocated between columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
}

impl Item {
    /// Creates a new item with the given ID and display content
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// Generates `length` seed items (item0, item1, ...) for pre-filled demo columns
pub fn generate_items(length: usize) -> Vec<Item> {
    (0..length)
        .map(|k| Item::new(ItemId::seeded(k), format!("Item {}", k)))
        .collect()
}
