use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ObtainTokenRequest, ObtainTokenResponse, RegisterUserRequest, RegisterUserResponse,
};
// Categories
use crate::category::adapter::incoming::web::routes::{CategoryResponse, CreateCategoryRequest};
// Recipes
use crate::recipe::adapter::incoming::web::dto::{
    IngredientRequest, IngredientResponse, RecipeRequest, RecipeResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        version = "1.0.0",
        description = "Share recipes with their ingredients. Anyone may read; only authors may change their own recipes."
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::obtain_token_handler,

        // Category endpoints
        crate::category::adapter::incoming::web::routes::get_categories_handler,
        crate::category::adapter::incoming::web::routes::create_category_handler,
        crate::category::adapter::incoming::web::routes::delete_category_handler,

        // Recipe endpoints
        crate::recipe::adapter::incoming::web::routes::get_recipes_handler,
        crate::recipe::adapter::incoming::web::routes::get_single_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::create_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::update_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::patch_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::delete_recipe_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RecipeResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            RegisterUserResponse,
            ObtainTokenRequest,
            ObtainTokenResponse,

            // Category DTOs
            CreateCategoryRequest,
            CategoryResponse,

            // Recipe DTOs
            RecipeRequest,
            IngredientRequest,
            RecipeResponse,
            IngredientResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and token endpoints"),
        (name = "categories", description = "Recipe categories"),
        (name = "recipes", description = "Recipes and their ingredients"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Enter `Token <key>`",
                ))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/register/",
            "/token-auth/",
            "/categories/",
            "/categories/{category_id}/",
            "/recipes/",
            "/recipes/{recipe_id}/",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn token_auth_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("token_auth"));
    }
}
