use crate::domain::customer::Customer;
use crate::domain::menu::Catalog;
use crate::domain::order::Order;
use crate::domain::payment::{Payment, PaymentMethod};
use crate::error::Result;
use crate::interfaces::presenter::{Presenter, SessionEvent};
use std::io::BufRead;

/// Outcome of a sub-loop: keep going, or the input stream ended.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Eof,
}

/// The interactive driver for one kiosk session.
///
/// Owns the catalog, the optional current order, and the history of paid
/// orders. The input stream is acquired at construction and released when
/// the session is dropped, on every exit path.
///
/// Domain errors never reach the caller: the impossible-through-the-UI
/// failures (sealed order, double settlement) are logged and recovered,
/// while user mistakes come back as presenter events. Only I/O errors
/// propagate.
pub struct KioskSession<R: BufRead, P: Presenter> {
    input: R,
    presenter: P,
    catalog: Catalog,
    current_order: Option<Order>,
    history: Vec<Order>,
}

impl<R: BufRead, P: Presenter> KioskSession<R, P> {
    pub fn new(catalog: Catalog, input: R, presenter: P) -> Self {
        Self {
            input,
            presenter,
            catalog,
            current_order: None,
            history: Vec::new(),
        }
    }

    /// Runs the menu loop until the customer exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        self.presenter.render(SessionEvent::Welcome)?;

        loop {
            self.presenter.render(SessionEvent::MainMenu)?;
            let Some(line) = read_line(&mut self.input)? else {
                break;
            };
            match line.parse::<i64>() {
                Ok(1) => {
                    if self.build_order()? == Flow::Eof {
                        break;
                    }
                }
                Ok(2) => self.view_order()?,
                Ok(3) => {
                    if self.checkout()? == Flow::Eof {
                        break;
                    }
                }
                Ok(4) => {
                    self.presenter.render(SessionEvent::Goodbye)?;
                    break;
                }
                _ => self.presenter.render(SessionEvent::InvalidChoice)?,
            }
        }

        if let Some(order) = &self.current_order {
            tracing::debug!(items = order.len(), "discarding unfinished order");
        }
        Ok(())
    }

    /// The BUILDING sub-loop: 1-based catalog picks until `0` or EOF.
    fn build_order(&mut self) -> Result<Flow> {
        if self.current_order.is_none() {
            self.current_order = Some(Order::new(Customer::walk_up()));
        }

        loop {
            self.presenter
                .render(SessionEvent::MenuShown(self.catalog.list()))?;
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(Flow::Eof);
            };
            match line.parse::<i64>() {
                Ok(0) => return Ok(Flow::Continue),
                Ok(n) if n > 0 && (n as usize) <= self.catalog.len() => {
                    let Some(item) = self.catalog.get(n as usize - 1).cloned() else {
                        continue;
                    };
                    if let Some(order) = self.current_order.as_mut() {
                        match order.add_item(item.clone()) {
                            Ok(()) => {
                                self.presenter.render(SessionEvent::ItemAdded(&item))?;
                            }
                            Err(err) => {
                                tracing::warn!(%err, item = %item.name, "item rejected");
                            }
                        }
                    }
                }
                _ => self.presenter.render(SessionEvent::InvalidChoice)?,
            }
        }
    }

    fn view_order(&mut self) -> Result<()> {
        match &self.current_order {
            Some(order) if !order.is_empty() => {
                self.presenter.render(SessionEvent::CurrentOrder {
                    items: order.items(),
                    total: order.total(),
                })?;
            }
            _ => self.presenter.render(SessionEvent::OrderEmpty)?,
        }
        Ok(())
    }

    /// FINALIZING: show the order, take a payment method, settle, archive.
    fn checkout(&mut self) -> Result<Flow> {
        match &self.current_order {
            Some(order) if !order.is_empty() => {
                self.presenter.render(SessionEvent::CurrentOrder {
                    items: order.items(),
                    total: order.total(),
                })?;
            }
            _ => {
                self.presenter.render(SessionEvent::NothingToFinalize)?;
                return Ok(Flow::Continue);
            }
        }

        self.presenter.render(SessionEvent::PaymentPrompt)?;
        let Some(line) = read_line(&mut self.input)? else {
            return Ok(Flow::Eof);
        };
        // Anything other than `1` selects card, matching the original kiosk.
        let method = if line == "1" {
            PaymentMethod::Cash
        } else {
            PaymentMethod::Card
        };

        let Some(mut order) = self.current_order.take() else {
            return Ok(Flow::Continue);
        };
        let mut payment = Payment::new(&mut order, method);
        if let Err(err) = payment.process() {
            tracing::warn!(%err, "payment not settled");
            self.current_order = Some(order);
            return Ok(Flow::Continue);
        }

        let total = order.total();
        self.history.push(order);
        self.presenter
            .render(SessionEvent::PaymentSettled { method, total })?;
        Ok(Flow::Continue)
    }

    /// Paid orders in finalization order.
    pub fn history(&self) -> &[Order] {
        &self.history
    }

    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.as_ref()
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::standard_menu;
    use crate::domain::order::OrderStatus;
    use crate::interfaces::presenter::TextPresenter;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_session(input: &str) -> KioskSession<Cursor<String>, TextPresenter<Vec<u8>>> {
        let mut session = KioskSession::new(
            standard_menu().unwrap(),
            Cursor::new(input.to_string()),
            TextPresenter::new(Vec::new()),
        );
        session.run().unwrap();
        session
    }

    #[test]
    fn test_back_does_not_touch_order() {
        let session = run_session("1\n0\n4\n");
        let order = session.current_order().unwrap();
        assert!(order.is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_checkout_archives_paid_order() {
        let session = run_session("1\n1\n0\n3\n2\n4\n");
        assert!(session.current_order().is_none());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].status(), OrderStatus::Paid);
        assert_eq!(session.history()[0].total().value(), dec!(25.00));
    }

    #[test]
    fn test_eof_terminates_cleanly() {
        let session = run_session("");
        assert!(session.current_order().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_eof_mid_build_terminates() {
        let session = run_session("1\n2\n");
        assert_eq!(session.current_order().unwrap().len(), 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_cash_method_selected_by_one() {
        let session = run_session("1\n4\n0\n3\n1\n4\n");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].total().value(), dec!(5.00));
    }
}
