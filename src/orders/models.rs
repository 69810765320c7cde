//! Order entities and transfer objects

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order row. `total` is written once at checkout and never recomputed from
/// the lines or from current menu prices (snapshot semantics).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    pub order_id: i64,
    pub user_id: i64,
    pub delivery_crew_id: Option<i64>,
    /// false = placed, true = delivered
    pub status: bool,
    pub total: Decimal,
    pub order_date: NaiveDate,
}

/// Order line row: immutable snapshot of one cart line at checkout time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderLine {
    pub line_id: i64,
    pub order_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineView {
    pub line_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    #[schema(value_type = String, example = "10.00")]
    pub unit_price: Decimal,
    #[schema(value_type = String, example = "30.00")]
    pub price: Decimal,
}

impl From<OrderLine> for OrderLineView {
    fn from(l: OrderLine) -> Self {
        Self {
            line_id: l.line_id,
            item_id: l.item_id,
            quantity: l.quantity,
            unit_price: l.unit_price,
            price: l.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderView {
    pub order_id: i64,
    pub user_id: i64,
    pub delivery_crew_id: Option<i64>,
    pub status: bool,
    #[schema(value_type = String, example = "42.50")]
    pub total: Decimal,
    pub order_date: NaiveDate,
    pub lines: Vec<OrderLineView>,
}

impl OrderView {
    pub fn from_parts(order: Order, lines: Vec<OrderLine>) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            delivery_crew_id: order.delivery_crew_id,
            status: order.status,
            total: order.total,
            order_date: order.order_date,
            lines: lines.into_iter().map(OrderLineView::from).collect(),
        }
    }
}

/// Checkout confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacedOrder {
    pub order_id: i64,
    #[schema(value_type = String, example = "42.50")]
    pub total: Decimal,
    pub line_count: u32,
}

/// Full update body (PUT): replaces crew assignment and delivery status.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderUpdateRequest {
    pub delivery_crew_id: Option<i64>,
    pub status: bool,
}

/// Partial update body (PATCH): absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderPatchRequest {
    pub delivery_crew_id: Option<i64>,
    pub status: Option<bool>,
}
