use serde::Serialize;

/// Identity fields shared by every actor the restaurant deals with.
///
/// Future actor types (staff, couriers) compose this record instead of
/// inheriting from a person hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub identity: Identity,
    pub address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity {
                name: name.into(),
                phone: phone.into(),
            },
            address: address.into(),
        }
    }

    /// The anonymous customer every kiosk order is billed to.
    pub fn walk_up() -> Self {
        Self::new("Kiosk Customer", "", "")
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn phone(&self) -> &str {
        &self.identity.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_up_customer() {
        let customer = Customer::walk_up();
        assert_eq!(customer.name(), "Kiosk Customer");
        assert_eq!(customer.phone(), "");
        assert_eq!(customer.address(), "");
    }
}
