//! Line item model
//!
//! A line item is a single named revenue or expense entry. Each category keeps
//! its items in a [`LineItemStore`], where insertion order is the row order
//! used for display and export.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{BusinessError, BusinessResult};

/// Which side of the ledger a store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Revenue,
    Expense,
}

impl Category {
    /// Section/sheet name used in displays and exports
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expense => "Expenses",
        }
    }

    /// Singular label, e.g. "Revenue Item 3"
    pub fn item_label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section_name())
    }
}

/// A single named monetary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name (may be empty, need not be unique)
    #[serde(default)]
    pub name: String,
    /// Amount, never negative once inside a store
    pub amount: Money,
}

impl LineItem {
    /// Create a new line item without validation
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// A blank row as the input form starts it
    pub fn blank() -> Self {
        Self::new("", Money::zero())
    }

    /// Validate the line item
    pub fn validate(&self) -> BusinessResult<()> {
        if self.amount.is_negative() {
            return Err(BusinessError::negative_amount(&self.name));
        }
        Ok(())
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Ordered collection of line items for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemStore {
    category: Category,
    items: Vec<LineItem>,
}

impl LineItemStore {
    /// Create an empty store
    pub fn new(category: Category) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }

    /// Build a store from existing items, validating every one
    pub fn from_items(
        category: Category,
        items: impl IntoIterator<Item = LineItem>,
    ) -> BusinessResult<Self> {
        let mut store = Self::new(category);
        for item in items {
            store.add(item.name, item.amount)?;
        }
        Ok(store)
    }

    /// The category this store holds
    pub fn category(&self) -> Category {
        self.category
    }

    /// Append a line item
    ///
    /// Fails with a validation error if the amount is negative or would
    /// push the store total past the largest representable amount.
    pub fn add(&mut self, name: impl Into<String>, amount: Money) -> BusinessResult<()> {
        let item = LineItem::new(name, amount);
        item.validate()?;
        self.check_total(&item, self.total())?;
        self.items.push(item);
        Ok(())
    }

    /// Replace the item at `index`
    pub fn set(
        &mut self,
        index: usize,
        name: impl Into<String>,
        amount: Money,
    ) -> BusinessResult<()> {
        let len = self.items.len();
        let item = LineItem::new(name, amount);
        item.validate()?;
        if let Some(current) = self.items.get(index) {
            // Amounts in a store are non-negative, so this cannot underflow
            self.check_total(&item, self.total() - current.amount)?;
        }
        let slot = self
            .items
            .get_mut(index)
            .ok_or(BusinessError::ItemOutOfRange {
                category: self.category.section_name(),
                index,
                len,
            })?;
        *slot = item;
        Ok(())
    }

    fn check_total(&self, item: &LineItem, rest: Money) -> BusinessResult<()> {
        match rest.checked_add(item.amount) {
            Some(_) => Ok(()),
            None => Err(BusinessError::total_overflow(
                self.category.section_name(),
                &item.name,
            )),
        }
    }

    /// Grow with blank rows or truncate to exactly `len` items
    pub fn resize(&mut self, len: usize) {
        self.items.resize_with(len, LineItem::blank);
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Sum of all amounts (zero for an empty store)
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| &item.amount).sum()
    }

    /// The item with the greatest amount
    ///
    /// Ties go to the first occurrence. Returns None for an empty store.
    pub fn max_item(&self) -> Option<&LineItem> {
        self.items.iter().fold(None, |best: Option<&LineItem>, item| match best {
            Some(current) if current.amount >= item.amount => Some(current),
            _ => Some(item),
        })
    }

    /// Items ordered by amount descending, equal amounts keeping insertion order
    ///
    /// Every call recomputes the order from the current contents.
    pub fn sorted_descending(&self) -> impl Iterator<Item = &LineItem> + '_ {
        let mut refs: Vec<&LineItem> = self.items.iter().collect();
        // sort_by is stable
        refs.sort_by(|a, b| b.amount.cmp(&a.amount));
        refs.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineItemStore {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
