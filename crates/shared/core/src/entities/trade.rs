use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::error::{DomainError, DomainResult};
use crate::values::{Pennies, Quantity, Symbol, Timestamp};

/// Unique identifier for a trade
pub type TradeId = Uuid;

/// An executed trade in a single stock
///
/// Validated once in [`Trade::new`]; there is no mutation API afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    id: TradeId,
    symbol: Symbol,
    timestamp: Timestamp,
    quantity: Quantity,
    side: Side,
    /// Price per share in pennies
    price: Pennies,
}

impl Trade {
    /// Create a trade, rejecting non-positive quantity or price
    pub fn new(
        symbol: Symbol,
        quantity: Quantity,
        side: Side,
        price: Pennies,
        timestamp: Timestamp,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::InvalidTrade(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        if price <= 0 {
            return Err(DomainError::InvalidTrade(format!(
                "price must be positive, got {price}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            symbol,
            timestamp,
            quantity,
            side,
            price,
        })
    }

    pub fn id(&self) -> TradeId {
        self.id
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Pennies {
        self.price
    }

    /// Returns the notional value of the trade in pennies (price * quantity)
    pub fn notional(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.price)
    }
}
