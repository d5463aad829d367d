use crate::domain::customer::Customer;
use crate::domain::menu::MenuItem;
use crate::domain::money::Price;
use crate::error::{KioskError, Result};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
}

/// A customer's basket with a lifecycle.
///
/// Items can be added and removed while the order is pending. Once paid the
/// order is sealed: the fields are private and every mutating operation
/// checks the status first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    customer: Customer,
    items: Vec<MenuItem>,
    status: OrderStatus,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            items: Vec::new(),
            status: OrderStatus::Pending,
        }
    }

    /// Appends an item. The same dish may appear more than once.
    pub fn add_item(&mut self, item: MenuItem) -> Result<()> {
        self.ensure_pending()?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with the given name.
    pub fn remove_item(&mut self, name: &str) -> Result<MenuItem> {
        self.ensure_pending()?;
        match self.items.iter().position(|i| i.name == name) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(KioskError::NotFound(name.to_string())),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Recomputed from the items on every call, never cached.
    pub fn total(&self) -> Price {
        self.items.iter().map(|i| i.unit_price).sum()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // Only Payment::process transitions an order to Paid.
    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }

    fn ensure_pending(&self) -> Result<()> {
        match self.status {
            OrderStatus::Pending => Ok(()),
            OrderStatus::Paid => Err(KioskError::OrderSealed),
        }
    }
}
