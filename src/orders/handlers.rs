use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::guard::{self, Mutation};
use super::models::{OrderLine, OrderPatchRequest, OrderUpdateRequest, OrderView, PlacedOrder};
use super::repository::OrderRepository;
use super::service;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Assemble views for a batch of orders with one lines query.
async fn assemble_views(
    state: &AppState,
    orders: Vec<super::models::Order>,
) -> Result<Vec<OrderView>, ApiError> {
    let order_ids: Vec<i64> = orders.iter().map(|o| o.order_id).collect();
    let lines = OrderRepository::lines_for(state.db.pool(), &order_ids).await?;

    let mut by_order: HashMap<i64, Vec<OrderLine>> = HashMap::new();
    for line in lines {
        by_order.entry(line.order_id).or_default().push(line);
    }

    Ok(orders
        .into_iter()
        .map(|o| {
            let lines = by_order.remove(&o.order_id).unwrap_or_default();
            OrderView::from_parts(o, lines)
        })
        .collect())
}

/// List orders visible to the caller
///
/// GET /api/v1/orders
///
/// Managers see all orders, delivery crew their assigned orders, customers
/// their own.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "Visible orders with their lines", body = ApiResponse<Vec<OrderView>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ApiResponse<Vec<OrderView>>>, ApiError> {
    let scope = guard::listing_scope(&principal);
    let orders = OrderRepository::list(state.db.pool(), scope).await?;
    let views = assemble_views(&state, orders).await?;
    Ok(Json(ApiResponse::success(views)))
}

/// Place an order from the caller's cart
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    responses(
        (status = 201, description = "Order placed, cart emptied", body = ApiResponse<PlacedOrder>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<(StatusCode, Json<ApiResponse<PlacedOrder>>), ApiError> {
    let placed = service::place_order(state.db.pool(), principal.user_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(placed))))
}

/// Get a single order
///
/// GET /api/v1/orders/{id}
///
/// Strict owner check: rejected for any caller other than the order's
/// customer, regardless of role.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its lines", body = ApiResponse<OrderView>),
        (status = 403, description = "Caller does not own this order"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<OrderView>>, ApiError> {
    let order = OrderRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    guard::check_single_read(&principal, order.user_id)?;

    let lines = OrderRepository::lines_for(state.db.pool(), &[order.order_id]).await?;
    Ok(Json(ApiResponse::success(OrderView::from_parts(
        order, lines,
    ))))
}

/// Replace an order's crew assignment and status (Manager only)
///
/// PUT /api/v1/orders/{id}
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = OrderUpdateRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderView>),
        (status = 403, description = "Caller is not a Manager"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<OrderUpdateRequest>,
) -> Result<Json<ApiResponse<OrderView>>, ApiError> {
    guard::check_mutation(&principal, Mutation::FullUpdate)?;

    let order = OrderRepository::update_full(state.db.pool(), id, req.delivery_crew_id, req.status)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    let lines = OrderRepository::lines_for(state.db.pool(), &[order.order_id]).await?;
    Ok(Json(ApiResponse::success(OrderView::from_parts(
        order, lines,
    ))))
}

/// Partially update an order (Manager or Delivery crew)
///
/// PATCH /api/v1/orders/{id}
#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = OrderPatchRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderView>),
        (status = 403, description = "Caller is neither Manager nor Delivery crew"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn patch_order(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderPatchRequest>,
) -> Result<Json<ApiResponse<OrderView>>, ApiError> {
    guard::check_mutation(&principal, Mutation::PartialUpdate)?;

    let order = OrderRepository::update_partial(state.db.pool(), id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    let lines = OrderRepository::lines_for(state.db.pool(), &[order.order_id]).await?;
    Ok(Json(ApiResponse::success(OrderView::from_parts(
        order, lines,
    ))))
}

/// Delete an order (Manager only)
///
/// DELETE /api/v1/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 403, description = "Caller is not a Manager"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    guard::check_mutation(&principal, Mutation::Delete)?;

    let deleted = OrderRepository::delete(state.db.pool(), id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Order"));
    }
    tracing::info!(order_id = id, "Order deleted");
    Ok(Json(ApiResponse::success(())))
}
