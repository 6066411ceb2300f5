use shared::OrderStatus;
use thiserror::Error;

use crate::store::StoreError;

/// Order errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order numbers exhausted")]
    OrderNumbersExhausted,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

pub type OrderResult<T> = Result<T, OrderError>;
