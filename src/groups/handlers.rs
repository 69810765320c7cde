//! Group membership administration (site administrators only)
//!
//! Two named groups exist: "Manager" and "Delivery crew". POST adds a member
//! by username, PUT idempotently ensures membership by user id, DELETE
//! removes. Every endpoint requires the staff flag on the caller.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::repository::{GroupRepository, UserView};
use crate::auth::principal::{DELIVERY_CREW_GROUP, MANAGER_GROUP, Principal, require_staff};
use crate::error::ApiError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Add Member Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    #[schema(example = "alice")]
    pub username: String,
}

async fn list_members(
    state: &AppState,
    principal: &Principal,
    group: &str,
) -> Result<Json<ApiResponse<Vec<UserView>>>, ApiError> {
    require_staff(principal)?;
    let members = GroupRepository::list_members(state.db.pool(), group).await?;
    Ok(Json(ApiResponse::success(members)))
}

async fn add_member(
    state: &AppState,
    principal: &Principal,
    group: &str,
    req: AddMemberRequest,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    require_staff(principal)?;
    let user_id = GroupRepository::find_user_by_username(state.db.pool(), &req.username)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    GroupRepository::add_member(state.db.pool(), group, user_id).await?;
    tracing::info!(user_id, group, "User added to group");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(()))))
}

async fn ensure_member(
    state: &AppState,
    principal: &Principal,
    group: &str,
    user_id: i64,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_staff(principal)?;
    if !GroupRepository::user_exists(state.db.pool(), user_id).await? {
        return Err(ApiError::NotFound("User"));
    }
    GroupRepository::add_member(state.db.pool(), group, user_id).await?;
    Ok(Json(ApiResponse::success(())))
}

async fn remove_member(
    state: &AppState,
    principal: &Principal,
    group: &str,
    user_id: i64,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_staff(principal)?;
    if !GroupRepository::remove_member(state.db.pool(), group, user_id).await? {
        return Err(ApiError::NotFound("Group member"));
    }
    tracing::info!(user_id, group, "User removed from group");
    Ok(Json(ApiResponse::success(())))
}

/// List Manager group members
#[utoipa::path(
    get,
    path = "/api/v1/groups/manager/users",
    responses(
        (status = 200, description = "Group members", body = ApiResponse<Vec<UserView>>),
        (status = 403, description = "Caller is not an administrator")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn list_managers(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ApiResponse<Vec<UserView>>>, ApiError> {
    list_members(&state, &principal, MANAGER_GROUP).await
}

/// Add a user to the Manager group by username
#[utoipa::path(
    post,
    path = "/api/v1/groups/manager/users",
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn add_manager(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    add_member(&state, &principal, MANAGER_GROUP, req).await
}

/// Ensure a user id is in the Manager group (idempotent)
#[utoipa::path(
    put,
    path = "/api/v1/groups/manager/users/{user_id}",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Membership ensured"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn ensure_manager(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    ensure_member(&state, &principal, MANAGER_GROUP, user_id).await
}

/// Remove a user from the Manager group
#[utoipa::path(
    delete,
    path = "/api/v1/groups/manager/users/{user_id}",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Member removed"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Membership not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn remove_manager(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    remove_member(&state, &principal, MANAGER_GROUP, user_id).await
}

/// List Delivery crew group members
#[utoipa::path(
    get,
    path = "/api/v1/groups/delivery-crew/users",
    responses(
        (status = 200, description = "Group members", body = ApiResponse<Vec<UserView>>),
        (status = 403, description = "Caller is not an administrator")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn list_delivery_crew(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ApiResponse<Vec<UserView>>>, ApiError> {
    list_members(&state, &principal, DELIVERY_CREW_GROUP).await
}

/// Add a user to the Delivery crew group by username
#[utoipa::path(
    post,
    path = "/api/v1/groups/delivery-crew/users",
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn add_delivery_crew(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    add_member(&state, &principal, DELIVERY_CREW_GROUP, req).await
}

/// Ensure a user id is in the Delivery crew group (idempotent)
#[utoipa::path(
    put,
    path = "/api/v1/groups/delivery-crew/users/{user_id}",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Membership ensured"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn ensure_delivery_crew(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    ensure_member(&state, &principal, DELIVERY_CREW_GROUP, user_id).await
}

/// Remove a user from the Delivery crew group
#[utoipa::path(
    delete,
    path = "/api/v1/groups/delivery-crew/users/{user_id}",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Member removed"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Membership not found")
    ),
    security(("bearer_jwt" = [])),
    tag = "Groups"
)]
pub async fn remove_delivery_crew(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    remove_member(&state, &principal, DELIVERY_CREW_GROUP, user_id).await
}
