//! Menu entities and transfer objects
//!
//! Rows map 1:1 to `categories_tb` / `menu_items_tb`; the `*View` types are
//! the explicit API-facing DTOs with field-level mapping (no dynamic
//! serialization of rows).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Category {
    pub category_id: i64,
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryView {
    pub category_id: i64,
    pub slug: String,
    pub title: String,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id,
            slug: c.slug,
            title: c.title,
        }
    }
}

#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct CategoryRequest {
    #[schema(example = "mains")]
    #[validate(length(min = 1, max = 64))]
    pub slug: String,
    #[schema(example = "Main courses")]
    #[validate(length(min = 1, max = 128))]
    pub title: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MenuItem {
    pub item_id: i64,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemView {
    pub item_id: i64,
    pub title: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub featured: bool,
    pub category_id: Option<i64>,
}

impl From<MenuItem> for MenuItemView {
    fn from(m: MenuItem) -> Self {
        Self {
            item_id: m.item_id,
            title: m.title,
            price: m.price,
            featured: m.featured,
            category_id: m.category_id,
        }
    }
}

#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct MenuItemRequest {
    #[schema(example = "Margherita pizza")]
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    #[serde(default)]
    pub featured: bool,
    pub category_id: Option<i64>,
}

/// Partial update body; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MenuItemPatch {
    pub title: Option<String>,
    #[schema(value_type = Option<String>, example = "13.00")]
    pub price: Option<Decimal>,
    pub featured: Option<bool>,
    pub category_id: Option<i64>,
}

/// Listing filters for GET /menu-items
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MenuItemFilter {
    /// Restrict to one category
    pub category: Option<i64>,
    /// Restrict to featured / non-featured items
    pub featured: Option<bool>,
}
