use crate::model::{MenuItemId, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for orders. Assigned monotonically by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The fixed set of order states. Only the status of a placed order may ever
/// change; every other field is frozen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on_the_way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string falls outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order status: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "on_the_way" => Ok(OrderStatus::OnTheWay),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// A placed order and its line items, as recorded in the ledger.
///
/// Created only by checkout. The aggregate is append-only: its items are
/// written together with it and never touched again, and of its fields only
/// `status` can be updated afterwards.
///
/// # Actor Framework
/// This struct implements the [`StoreEntity`](tiffin_actor::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](tiffin_actor::StoreActor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: String,
    /// Σ(price_at_order × quantity), computed once at checkout and frozen.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    /// Snapshot of the menu price at the moment of checkout. Later catalog
    /// price changes never reach this field.
    pub price_at_order: f64,
}

/// Payload for recording an order. The ledger stamps the id, the Pending
/// status, and the order date.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: String,
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

/// Payload for updating an order. Status is the only field reachable through
/// the update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "refunded".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, InvalidStatus("refunded".to_string()));
    }
}
