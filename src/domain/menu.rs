use crate::domain::money::Price;
use crate::error::{KioskError, Result};
use rust_decimal_macros::dec;
use serde::Serialize;

/// A dish on the menu. Within a catalog the name is the item's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub unit_price: Price,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Price,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unit_price,
        }
    }
}

/// The fixed, insertion-ordered list of sellable items.
///
/// Display order is insertion order; the session maps the user's 1-based
/// choices onto it. Mutation only happens while seeding at startup.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Names are identity, so a duplicate name is rejected.
    pub fn add(&mut self, item: MenuItem) -> Result<()> {
        if self.items.iter().any(|i| i.name == item.name) {
            return Err(KioskError::CatalogConflict(item.name));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with the given name.
    pub fn remove(&mut self, name: &str) -> Result<MenuItem> {
        match self.items.iter().position(|i| i.name == name) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(KioskError::NotFound(name.to_string())),
        }
    }

    /// An immutable snapshot of the catalog in display order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Seeds the fixed menu the kiosk boots with.
pub fn standard_menu() -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.add(MenuItem::new(
        "Burger",
        "Burger with cheese and salad",
        Price::new(dec!(25.00))?,
    ))?;
    catalog.add(MenuItem::new(
        "Pizza",
        "Mozzarella pizza",
        Price::new(dec!(35.00))?,
    ))?;
    catalog.add(MenuItem::new(
        "Caesar Salad",
        "Salad with grilled chicken",
        Price::new(dec!(20.00))?,
    ))?;
    catalog.add(MenuItem::new("Soda", "350ml can", Price::new(dec!(5.00))?))?;
    Ok(catalog)
}
