use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use validator::Validate;

use super::models::{CartLineRequest, CartLineView};
use super::repository::CartRepository;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::gateway::{state::AppState, types::ApiResponse};
use crate::menu::repository::MenuItemRepository;

/// List the caller's cart
///
/// GET /api/v1/cart/menu-items
#[utoipa::path(
    get,
    path = "/api/v1/cart/menu-items",
    responses(
        (status = 200, description = "Own cart lines", body = ApiResponse<Vec<CartLineView>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn list_cart(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ApiResponse<Vec<CartLineView>>>, ApiError> {
    let lines = CartRepository::list_for_user(state.db.pool(), principal.user_id).await?;
    let views = lines.into_iter().map(CartLineView::from).collect();
    Ok(Json(ApiResponse::success(views)))
}

/// Add or update a cart line
///
/// POST /api/v1/cart/menu-items
///
/// The persisted price is always `quantity * unit_price`; a tampered
/// client-side price is discarded.
#[utoipa::path(
    post,
    path = "/api/v1/cart/menu-items",
    request_body = CartLineRequest,
    responses(
        (status = 201, description = "Cart line written", body = ApiResponse<CartLineView>),
        (status = 400, description = "Invalid quantity or price"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn upsert_cart_line(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CartLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CartLineView>>), ApiError> {
    req.validate()?;
    if req.unit_price < Decimal::ZERO {
        return Err(ApiError::Validation("Unit price must not be negative".into()));
    }

    // The line must reference a real menu item
    MenuItemRepository::get_by_id(state.db.pool(), req.item_id)
        .await?
        .ok_or(ApiError::NotFound("Menu item"))?;

    let line = CartRepository::upsert_line(
        state.db.pool(),
        principal.user_id,
        req.item_id,
        req.quantity,
        req.unit_price,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CartLineView::from(line))),
    ))
}

/// Delete one cart line
///
/// DELETE /api/v1/cart/menu-items/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/cart/menu-items/{id}",
    params(("id" = i64, Path, description = "Cart line ID")),
    responses(
        (status = 200, description = "Cart line deleted"),
        (status = 404, description = "Cart line not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Cart"
)]
pub async fn delete_cart_line(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let deleted = CartRepository::delete_line(state.db.pool(), principal.user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Cart line"));
    }
    Ok(Json(ApiResponse::success(())))
}
