use crate::domain::menu::MenuItem;
use crate::domain::money::Price;
use crate::domain::payment::PaymentMethod;
use std::io::{self, Write};

/// Everything the session wants the customer to see.
///
/// The session emits facts; how they read on screen is the presenter's
/// business. This keeps wording out of the state machine and lets tests
/// capture output through any `Write`.
#[derive(Debug)]
pub enum SessionEvent<'a> {
    Welcome,
    MainMenu,
    MenuShown(&'a [MenuItem]),
    ItemAdded(&'a MenuItem),
    CurrentOrder {
        items: &'a [MenuItem],
        total: Price,
    },
    OrderEmpty,
    NothingToFinalize,
    PaymentPrompt,
    PaymentSettled {
        method: PaymentMethod,
        total: Price,
    },
    InvalidChoice,
    Goodbye,
}

pub trait Presenter {
    fn render(&mut self, event: SessionEvent<'_>) -> io::Result<()>;
}

/// Renders session events as plain text lines.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, event: SessionEvent<'_>) -> io::Result<()> {
        match event {
            SessionEvent::Welcome => {
                writeln!(self.out, "Welcome to the self-service kiosk!")?;
            }
            SessionEvent::MainMenu => {
                writeln!(self.out)?;
                writeln!(self.out, "=== Main Menu ===")?;
                writeln!(self.out, "1. Build your order")?;
                writeln!(self.out, "2. View current order")?;
                writeln!(self.out, "3. Checkout")?;
                writeln!(self.out, "4. Exit")?;
                write!(self.out, "Choose an option: ")?;
            }
            SessionEvent::MenuShown(items) => {
                writeln!(self.out)?;
                writeln!(self.out, "=== Menu ===")?;
                for (i, item) in items.iter().enumerate() {
                    writeln!(self.out, "{}. {} - ${}", i + 1, item.name, item.unit_price)?;
                    writeln!(self.out, "   {}", item.description)?;
                }
                writeln!(self.out, "0. Back")?;
                write!(self.out, "Pick an item (0 to go back): ")?;
            }
            SessionEvent::ItemAdded(item) => {
                writeln!(self.out, "{} added to your order.", item.name)?;
            }
            SessionEvent::CurrentOrder { items, total } => {
                writeln!(self.out)?;
                writeln!(self.out, "=== Your Order ===")?;
                for item in items {
                    writeln!(self.out, "{} - ${}", item.name, item.unit_price)?;
                }
                writeln!(self.out, "Total: ${total}")?;
            }
            SessionEvent::OrderEmpty => {
                writeln!(self.out, "Your order is empty.")?;
            }
            SessionEvent::NothingToFinalize => {
                writeln!(self.out, "There is nothing to check out.")?;
            }
            SessionEvent::PaymentPrompt => {
                writeln!(self.out)?;
                writeln!(self.out, "How would you like to pay?")?;
                writeln!(self.out, "1. Cash")?;
                writeln!(self.out, "2. Card")?;
                write!(self.out, "Choose an option: ")?;
            }
            SessionEvent::PaymentSettled { method, total } => {
                writeln!(self.out, "Payment of ${total} by {method} accepted. Thank you!")?;
            }
            SessionEvent::InvalidChoice => {
                writeln!(self.out, "Invalid choice, try again.")?;
            }
            SessionEvent::Goodbye => {
                writeln!(self.out, "Thanks for visiting. Goodbye!")?;
            }
        }
        // Prompts end without a newline, so flush unconditionally.
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn render_to_string(event: SessionEvent<'_>) -> String {
        let mut buf = Vec::new();
        TextPresenter::new(&mut buf).render(event).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_lists_items_one_indexed() {
        let items = vec![
            MenuItem::new("Burger", "with cheese", Price::new(dec!(25.00)).unwrap()),
            MenuItem::new("Soda", "350ml can", Price::new(dec!(5.00)).unwrap()),
        ];
        let output = render_to_string(SessionEvent::MenuShown(&items));
        assert!(output.contains("1. Burger - $25.00"));
        assert!(output.contains("2. Soda - $5.00"));
        assert!(output.contains("0. Back"));
    }

    #[test]
    fn test_current_order_shows_total() {
        let items = vec![MenuItem::new(
            "Caesar Salad",
            "",
            Price::new(dec!(20.00)).unwrap(),
        )];
        let output = render_to_string(SessionEvent::CurrentOrder {
            items: &items,
            total: Price::new(dec!(20.00)).unwrap(),
        });
        assert!(output.contains("Caesar Salad - $20.00"));
        assert!(output.contains("Total: $20.00"));
    }

    #[test]
    fn test_payment_settled_names_method() {
        let output = render_to_string(SessionEvent::PaymentSettled {
            method: PaymentMethod::Card,
            total: Price::new(dec!(65.00)).unwrap(),
        });
        assert_eq!(output, "Payment of $65.00 by card accepted. Thank you!\n");
    }
}
