//! # Items and the Catalog
//!
//! An [`Item`] is an immutable `(name, weight, value)` triple. The [`Catalog`] owns
//! every item a run may choose from and hands out shared `Arc<Item>` handles, so
//! chromosomes reference catalog items rather than copying them.
//!
//! Item names are identities: two genes are the same gene exactly when their names
//! match, which is why the catalog refuses duplicate names.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::item::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", 20, 6),
//!     Item::new("b", 30, 5),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.contains("b"));
//! assert!(Catalog::new(vec![Item::new("a", 1, 1), Item::new("a", 2, 2)]).is_err());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{GeneticError, Result};

/// A single candidate item for the knapsack.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    weight: u32,
    value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.weight, self.value)
    }
}

/// The immutable universe of items a run selects from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if two items share a name.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            if let Some(duplicate) = items.iter().find(|item| !seen.insert(item.name())) {
                return Err(GeneticError::Configuration(format!(
                    "Duplicate item name in catalog: {}",
                    duplicate.name()
                )));
            }
        }

        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.name() == name)
    }
}
