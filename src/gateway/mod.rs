pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{auth, cart, groups, menu, orders};
use state::AppState;

/// Assemble the full application router.
///
/// Route groups:
/// - `/api/v1/auth/*` and `/api/v1/category`, `/api/v1/health`: open
/// - everything else under `/api/v1`: bearer-token protected; the auth
///   middleware injects the request-scoped [`crate::Principal`]
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login));

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/category",
            get(menu::handlers::list_categories).post(menu::handlers::create_category),
        );

    let protected_routes = Router::new()
        .route(
            "/menu-items",
            get(menu::handlers::list_menu_items).post(menu::handlers::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            get(menu::handlers::get_menu_item)
                .put(menu::handlers::update_menu_item)
                .patch(menu::handlers::patch_menu_item)
                .delete(menu::handlers::delete_menu_item),
        )
        .route(
            "/cart/menu-items",
            get(cart::handlers::list_cart).post(cart::handlers::upsert_cart_line),
        )
        .route(
            "/cart/menu-items/{id}",
            delete(cart::handlers::delete_cart_line),
        )
        .route(
            "/orders",
            get(orders::handlers::list_orders).post(orders::handlers::place_order),
        )
        .route(
            "/orders/{id}",
            get(orders::handlers::get_order)
                .put(orders::handlers::update_order)
                .patch(orders::handlers::patch_order)
                .delete(orders::handlers::delete_order),
        )
        .route(
            "/groups/manager/users",
            get(groups::handlers::list_managers).post(groups::handlers::add_manager),
        )
        .route(
            "/groups/manager/users/{user_id}",
            put(groups::handlers::ensure_manager).delete(groups::handlers::remove_manager),
        )
        .route(
            "/groups/delivery-crew/users",
            get(groups::handlers::list_delivery_crew).post(groups::handlers::add_delivery_crew),
        )
        .route(
            "/groups/delivery-crew/users/{user_id}",
            put(groups::handlers::ensure_delivery_crew)
                .delete(groups::handlers::remove_delivery_crew),
        )
        .layer(from_fn_with_state(
            state.clone(),
            auth::middleware::auth_middleware,
        ));

    let api = Router::new()
        .nest("/auth", auth_routes)
        .merge(public_routes)
        .merge(protected_routes);

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
