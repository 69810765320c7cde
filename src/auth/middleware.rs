use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::gateway::state::AppState;

/// Bearer-token middleware for all authenticated routes.
///
/// Verifies the JWT, resolves the caller's [`crate::Principal`] once, and
/// injects it as a request extension for handlers to extract.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::AuthFailed("Invalid token format".to_string()))?;

    let claims = state.auth.verify_token(token)?;
    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| ApiError::AuthFailed("Invalid token subject".to_string()))?;

    let principal = state.auth.resolve_principal(user_id).await?;
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
