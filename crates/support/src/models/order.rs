//! Catalog and order models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopclerk_core::{OrderId, Price, ProductId, UserId};

/// A catalog product. Read-only from the orchestrator's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Optional catalog category.
    pub category: Option<String>,
}

/// An order joined with its owner's name and its product's name.
///
/// This is the shape the record store returns for order lookups; status
/// changes originate in the fulfillment system, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: i64,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Free-form status text (e.g., "pending", "shipped").
    pub status: String,
    /// Owning user's display name.
    pub customer_name: String,
    /// Product's display name.
    pub product_name: String,
}
