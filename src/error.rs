use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("menu already has an item named {0:?}")]
    CatalogConflict(String),
    #[error("no item named {0:?}")]
    NotFound(String),
    #[error("order is paid and can no longer be changed")]
    OrderSealed,
    #[error("payment has already been processed")]
    AlreadyProcessed,
    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KioskError>;
