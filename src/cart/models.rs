//! Cart entities and transfer objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CartLine {
    pub line_id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineView {
    pub line_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    #[schema(value_type = String, example = "10.00")]
    pub unit_price: Decimal,
    #[schema(value_type = String, example = "30.00")]
    pub price: Decimal,
}

impl From<CartLine> for CartLineView {
    fn from(l: CartLine) -> Self {
        Self {
            line_id: l.line_id,
            item_id: l.item_id,
            quantity: l.quantity,
            unit_price: l.unit_price,
            price: l.price,
        }
    }
}

/// Cart line create/update body.
///
/// A client-supplied `price` is accepted by the deserializer but never
/// persisted; the stored price is always `quantity * unit_price`.
#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct CartLineRequest {
    pub item_id: i64,
    #[validate(range(min = 1))]
    #[schema(example = 3)]
    pub quantity: i32,
    #[schema(value_type = String, example = "10.00")]
    pub unit_price: Decimal,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "999.00")]
    pub price: Option<Decimal>,
}

/// The one pricing rule of the cart: the stored line price is the product
/// of quantity and unit price, regardless of what the client sent.
pub fn normalized_price(quantity: i32, unit_price: Decimal) -> Decimal {
    unit_price * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_price() {
        assert_eq!(
            normalized_price(3, Decimal::new(1000, 2)),
            Decimal::new(3000, 2)
        );
        assert_eq!(normalized_price(1, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_tampered_client_price_is_ignored() {
        // quantity=3, unit_price=10, client claims price=999
        let req = CartLineRequest {
            item_id: 1,
            quantity: 3,
            unit_price: Decimal::new(1000, 2),
            price: Some(Decimal::new(99900, 2)),
        };
        let persisted = normalized_price(req.quantity, req.unit_price);
        assert_eq!(persisted, Decimal::new(3000, 2)); // 30.00, not 999.00
    }

    #[test]
    fn test_quantity_validation() {
        use validator::Validate;

        let zero_qty = CartLineRequest {
            item_id: 1,
            quantity: 0,
            unit_price: Decimal::ONE,
            price: None,
        };
        assert!(zero_qty.validate().is_err());
    }
}
