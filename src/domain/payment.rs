use crate::domain::order::{Order, OrderStatus};
use crate::error::{KioskError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
        }
    }
}

/// A one-shot settlement against a single order.
///
/// The payment borrows the order for its own lifetime; once `process` has
/// run the order is paid and the payment can be dropped. Capture is
/// simulated, no gateway is contacted.
#[derive(Debug)]
pub struct Payment<'a> {
    order: &'a mut Order,
    method: PaymentMethod,
    settled: bool,
}

impl<'a> Payment<'a> {
    pub fn new(order: &'a mut Order, method: PaymentMethod) -> Self {
        Self {
            order,
            method,
            settled: false,
        }
    }

    /// Settles the payment and seals the order.
    ///
    /// Not idempotent: a second call fails with `AlreadyProcessed`, which
    /// protects against an accidental double close.
    pub fn process(&mut self) -> Result<()> {
        if self.settled {
            return Err(KioskError::AlreadyProcessed);
        }
        if self.order.status() != OrderStatus::Pending {
            return Err(KioskError::OrderSealed);
        }
        self.order.mark_paid();
        self.settled = true;
        tracing::debug!(method = %self.method, total = %self.order.total(), "payment settled");
        Ok(())
    }

    pub fn settled(&self) -> bool {
        self.settled
    }

    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::menu::MenuItem;
    use crate::domain::money::Price;
    use rust_decimal_macros::dec;

    fn pending_order() -> Order {
        let mut order = Order::new(Customer::walk_up());
        order
            .add_item(MenuItem::new(
                "Burger",
                "",
                Price::new(dec!(25.00)).unwrap(),
            ))
            .unwrap();
        order
    }

    #[test]
    fn test_process_settles_and_seals() {
        let mut order = pending_order();
        let mut payment = Payment::new(&mut order, PaymentMethod::Card);
        assert!(!payment.settled());

        payment.process().unwrap();
        assert!(payment.settled());
        assert_eq!(payment.method(), PaymentMethod::Card);
        assert_eq!(payment.order().status(), OrderStatus::Paid);
    }

    #[test]
    fn test_process_twice_fails() {
        let mut order = pending_order();
        let mut payment = Payment::new(&mut order, PaymentMethod::Cash);
        payment.process().unwrap();

        assert!(matches!(
            payment.process(),
            Err(KioskError::AlreadyProcessed)
        ));
        // Still settled, order still paid.
        assert!(payment.settled());
        assert_eq!(payment.order().status(), OrderStatus::Paid);
    }

    #[test]
    fn test_process_on_paid_order_fails() {
        let mut order = pending_order();
        Payment::new(&mut order, PaymentMethod::Card).process().unwrap();

        let mut second = Payment::new(&mut order, PaymentMethod::Cash);
        assert!(matches!(second.process(), Err(KioskError::OrderSealed)));
        assert!(!second.settled());
    }
}
