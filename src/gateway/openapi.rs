//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::cart::models::{CartLineRequest, CartLineView};
use crate::gateway::handlers::HealthResponse;
use crate::groups::handlers::AddMemberRequest;
use crate::groups::repository::UserView;
use crate::menu::models::{
    CategoryRequest, CategoryView, MenuItemPatch, MenuItemRequest, MenuItemView,
};
use crate::orders::models::{
    OrderLineView, OrderPatchRequest, OrderUpdateRequest, OrderView, PlacedOrder,
};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bistro Ordering API",
        version = "1.0.0",
        description = "Restaurant ordering backend: menu management, carts, atomic checkout and role-gated order administration.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::menu::handlers::list_categories,
        crate::menu::handlers::create_category,
        crate::menu::handlers::list_menu_items,
        crate::menu::handlers::create_menu_item,
        crate::menu::handlers::get_menu_item,
        crate::menu::handlers::update_menu_item,
        crate::menu::handlers::patch_menu_item,
        crate::menu::handlers::delete_menu_item,
        crate::groups::handlers::list_managers,
        crate::groups::handlers::add_manager,
        crate::groups::handlers::ensure_manager,
        crate::groups::handlers::remove_manager,
        crate::groups::handlers::list_delivery_crew,
        crate::groups::handlers::add_delivery_crew,
        crate::groups::handlers::ensure_delivery_crew,
        crate::groups::handlers::remove_delivery_crew,
        crate::cart::handlers::list_cart,
        crate::cart::handlers::upsert_cart_line,
        crate::cart::handlers::delete_cart_line,
        crate::orders::handlers::list_orders,
        crate::orders::handlers::place_order,
        crate::orders::handlers::get_order,
        crate::orders::handlers::update_order,
        crate::orders::handlers::patch_order,
        crate::orders::handlers::delete_order,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            CategoryRequest,
            CategoryView,
            MenuItemRequest,
            MenuItemPatch,
            MenuItemView,
            AddMemberRequest,
            UserView,
            CartLineRequest,
            CartLineView,
            OrderView,
            OrderLineView,
            PlacedOrder,
            OrderUpdateRequest,
            OrderPatchRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Health checks"),
        (name = "Auth", description = "Registration and login"),
        (name = "Menu", description = "Categories and menu items"),
        (name = "Groups", description = "Manager / Delivery crew membership (administrators only)"),
        (name = "Cart", description = "Per-user cart management"),
        (name = "Orders", description = "Order placement and administration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Bistro Ordering API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Bistro Ordering API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/menu-items"));
        assert!(paths.paths.contains_key("/api/v1/cart/menu-items"));
        assert!(paths.paths.contains_key("/api/v1/orders"));
        assert!(paths.paths.contains_key("/api/v1/orders/{id}"));
        assert!(
            paths
                .paths
                .contains_key("/api/v1/groups/delivery-crew/users/{user_id}")
        );
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_jwt"));
    }
}
