use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use validator::Validate;

use super::models::{
    CategoryRequest, CategoryView, MenuItemFilter, MenuItemPatch, MenuItemRequest, MenuItemView,
};
use super::repository::{CategoryRepository, MenuItemRepository};
use crate::auth::principal::{Principal, require_manager};
use crate::error::ApiError;
use crate::gateway::{state::AppState, types::ApiResponse};
use rust_decimal::Decimal;

fn reject_negative_price(price: Decimal) -> Result<(), ApiError> {
    if price < Decimal::ZERO {
        return Err(ApiError::Validation("Price must not be negative".into()));
    }
    Ok(())
}

/// List categories
///
/// GET /api/v1/category (open)
#[utoipa::path(
    get,
    path = "/api/v1/category",
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryView>>)
    ),
    tag = "Menu"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CategoryView>>>, ApiError> {
    let categories = CategoryRepository::list(state.db.pool()).await?;
    let views = categories.into_iter().map(CategoryView::from).collect();
    Ok(Json(ApiResponse::success(views)))
}

/// Create a category
///
/// POST /api/v1/category (open)
#[utoipa::path(
    post,
    path = "/api/v1/category",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryView>),
        (status = 409, description = "Slug already exists")
    ),
    tag = "Menu"
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryView>>), ApiError> {
    req.validate()?;
    let category = CategoryRepository::create(state.db.pool(), &req.slug, &req.title).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CategoryView::from(category))),
    ))
}

/// List menu items
///
/// GET /api/v1/menu-items
#[utoipa::path(
    get,
    path = "/api/v1/menu-items",
    params(MenuItemFilter),
    responses(
        (status = 200, description = "Menu items", body = ApiResponse<Vec<MenuItemView>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn list_menu_items(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MenuItemFilter>,
) -> Result<Json<ApiResponse<Vec<MenuItemView>>>, ApiError> {
    let items = MenuItemRepository::list(state.db.pool(), &filter).await?;
    let views = items.into_iter().map(MenuItemView::from).collect();
    Ok(Json(ApiResponse::success(views)))
}

/// Create a menu item (Manager only)
///
/// POST /api/v1/menu-items
#[utoipa::path(
    post,
    path = "/api/v1/menu-items",
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = ApiResponse<MenuItemView>),
        (status = 403, description = "Caller is not a Manager")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<MenuItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItemView>>), ApiError> {
    require_manager(&principal)?;
    req.validate()?;
    reject_negative_price(req.price)?;

    let item = MenuItemRepository::create(
        state.db.pool(),
        &req.title,
        req.price,
        req.featured,
        req.category_id,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MenuItemView::from(item))),
    ))
}

/// Get a single menu item
///
/// GET /api/v1/menu-items/{id}
#[utoipa::path(
    get,
    path = "/api/v1/menu-items/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item", body = ApiResponse<MenuItemView>),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MenuItemView>>, ApiError> {
    let item = MenuItemRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or(ApiError::NotFound("Menu item"))?;
    Ok(Json(ApiResponse::success(MenuItemView::from(item))))
}

/// Replace a menu item (Manager only)
///
/// PUT /api/v1/menu-items/{id}
#[utoipa::path(
    put,
    path = "/api/v1/menu-items/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemView>),
        (status = 403, description = "Caller is not a Manager"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn update_menu_item(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<MenuItemRequest>,
) -> Result<Json<ApiResponse<MenuItemView>>, ApiError> {
    require_manager(&principal)?;
    req.validate()?;
    reject_negative_price(req.price)?;

    let item = MenuItemRepository::update_full(
        state.db.pool(),
        id,
        &req.title,
        req.price,
        req.featured,
        req.category_id,
    )
    .await?
    .ok_or(ApiError::NotFound("Menu item"))?;
    Ok(Json(ApiResponse::success(MenuItemView::from(item))))
}

/// Partially update a menu item (Manager only)
///
/// PATCH /api/v1/menu-items/{id}
#[utoipa::path(
    patch,
    path = "/api/v1/menu-items/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    request_body = MenuItemPatch,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemView>),
        (status = 403, description = "Caller is not a Manager"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn patch_menu_item(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<ApiResponse<MenuItemView>>, ApiError> {
    require_manager(&principal)?;
    if let Some(price) = patch.price {
        reject_negative_price(price)?;
    }

    let item = MenuItemRepository::update_partial(state.db.pool(), id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Menu item"))?;
    Ok(Json(ApiResponse::success(MenuItemView::from(item))))
}

/// Delete a menu item (Manager only)
///
/// DELETE /api/v1/menu-items/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/menu-items/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 403, description = "Caller is not a Manager"),
        (status = 404, description = "Menu item not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Menu"
)]
pub async fn delete_menu_item(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_manager(&principal)?;

    let deleted = MenuItemRepository::delete(state.db.pool(), id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Menu item"));
    }
    Ok(Json(ApiResponse::success(())))
}
