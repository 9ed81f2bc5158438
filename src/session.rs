//! Report session
//!
//! A session exclusively owns one revenue store and one expense store. Every
//! operation that reads or edits entered data receives the session
//! explicitly.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::BusinessResult;
use crate::models::{Category, LineItemStore, Money, SessionId};

/// The pair of stores behind one calculator form
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    revenue: LineItemStore,
    expenses: LineItemStore,
}

impl Session {
    /// An empty session
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            revenue: LineItemStore::new(Category::Revenue),
            expenses: LineItemStore::new(Category::Expense),
        }
    }

    /// A session with the configured minimum of blank rows per category,
    /// as the input form starts
    pub fn with_rows(settings: &Settings) -> Self {
        let mut session = Self::new();
        session.revenue.resize(settings.min_items);
        session.expenses.resize(settings.min_items);
        session
    }

    /// Wrap existing stores
    pub fn from_stores(revenue: LineItemStore, expenses: LineItemStore) -> Self {
        Self {
            id: SessionId::new(),
            revenue,
            expenses,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The store for a category
    pub fn store(&self, category: Category) -> &LineItemStore {
        match category {
            Category::Revenue => &self.revenue,
            Category::Expense => &self.expenses,
        }
    }

    fn store_mut(&mut self, category: Category) -> &mut LineItemStore {
        match category {
            Category::Revenue => &mut self.revenue,
            Category::Expense => &mut self.expenses,
        }
    }

    pub fn revenue(&self) -> &LineItemStore {
        &self.revenue
    }

    pub fn expenses(&self) -> &LineItemStore {
        &self.expenses
    }

    /// Set how many rows a category has, clamped to the configured bounds
    ///
    /// Returns the row count actually applied.
    pub fn set_item_count(
        &mut self,
        category: Category,
        requested: usize,
        settings: &Settings,
    ) -> usize {
        let count = settings.clamp_item_count(requested);
        self.store_mut(category).resize(count);
        debug!(session = %self.id, %category, requested, count, "item count set");
        count
    }

    /// Replace one row
    pub fn set_item(
        &mut self,
        category: Category,
        index: usize,
        name: impl Into<String>,
        amount: Money,
    ) -> BusinessResult<()> {
        let id = self.id;
        self.store_mut(category)
            .set(index, name, amount)
            .inspect_err(|e| warn!(session = %id, %category, index, error = %e, "edit rejected"))?;
        debug!(session = %id, %category, index, %amount, "item updated");
        Ok(())
    }

    /// Append a row
    pub fn add_item(
        &mut self,
        category: Category,
        name: impl Into<String>,
        amount: Money,
    ) -> BusinessResult<()> {
        let id = self.id;
        self.store_mut(category)
            .add(name, amount)
            .inspect_err(|e| warn!(session = %id, %category, error = %e, "item rejected"))?;
        debug!(session = %id, %category, "item added");
        Ok(())
    }

    /// Clear both stores back to the configured minimum of blank rows
    pub fn reset(&mut self, settings: &Settings) {
        for category in [Category::Revenue, Category::Expense] {
            let store = self.store_mut(category);
            store.clear();
            store.resize(settings.min_items);
        }
        debug!(session = %self.id, "session reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_rows_starts_at_minimum() {
        let settings = Settings::default();
        let session = Session::with_rows(&settings);
        assert_eq!(session.revenue().len(), 1);
        assert_eq!(session.expenses().len(), 1);
        assert_eq!(session.revenue().total(), Money::zero());
    }

    #[test]
    fn test_set_item_count_is_clamped() {
        let settings = Settings::default();
        let mut session = Session::with_rows(&settings);

        assert_eq!(session.set_item_count(Category::Revenue, 25, &settings), 10);
        assert_eq!(session.revenue().len(), 10);

        assert_eq!(session.set_item_count(Category::Revenue, 0, &settings), 1);
        assert_eq!(session.revenue().len(), 1);

        assert_eq!(session.set_item_count(Category::Expense, 4, &settings), 4);
        assert_eq!(session.expenses().len(), 4);
    }

    #[test]
    fn test_shrinking_keeps_leading_rows() {
        let settings = Settings::default();
        let mut session = Session::with_rows(&settings);
        session.set_item_count(Category::Expense, 3, &settings);
        session
            .set_item(Category::Expense, 0, "Rent", Money::from_units(500, 0))
            .unwrap();
        session
            .set_item(Category::Expense, 2, "Fuel", Money::from_units(80, 0))
            .unwrap();

        session.set_item_count(Category::Expense, 1, &settings);
        assert_eq!(session.expenses().total(), Money::from_units(500, 0));
    }

    #[test]
    fn test_set_item_rejects_negative_and_out_of_range() {
        let settings = Settings::default();
        let mut session = Session::with_rows(&settings);

        let err = session
            .set_item(Category::Revenue, 0, "Sales", Money::from_cents(-1))
            .unwrap_err();
        assert!(err.is_validation());

        let err = session
            .set_item(Category::Revenue, 3, "Sales", Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.revenue().get(0).unwrap().name, "");
    }

    #[test]
    fn test_reset() {
        let settings = Settings::default();
        let mut session = Session::new();
        session
            .add_item(Category::Revenue, "Sales", Money::from_units(10, 0))
            .unwrap();
        session
            .add_item(Category::Revenue, "Services", Money::from_units(20, 0))
            .unwrap();

        session.reset(&settings);
        assert_eq!(session.revenue().len(), 1);
        assert_eq!(session.expenses().len(), 1);
        assert!(session.revenue().total().is_zero());
    }

    #[test]
    fn test_store_by_category() {
        let mut session = Session::new();
        session
            .add_item(Category::Expense, "Rent", Money::from_units(1, 0))
            .unwrap();
        assert_eq!(session.store(Category::Expense).len(), 1);
        assert!(session.store(Category::Revenue).is_empty());
    }
}
