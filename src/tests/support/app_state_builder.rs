use actix_web::web;
use std::sync::Arc;

use crate::auth::application::domain::entities::TokenIdentity;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::use_cases::authenticate_token::IAuthenticateTokenUseCase;
use crate::auth::application::use_cases::obtain_token::IObtainTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase,
};
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::recipe::application::service::in_memory::{FakeCategories, InMemoryRecipes};
use crate::recipe::application::service::{
    CreateRecipeService, DeleteRecipeService, GetRecipesService, GetSingleRecipeService,
    UpdateRecipeService,
};
use crate::tests::support::auth_helper::StubAuthenticateTokenUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    obtain_token: Arc<dyn IObtainTokenUseCase + Send + Sync>,
    authenticate_token: Option<Arc<dyn IAuthenticateTokenUseCase + Send + Sync>>,
    tokens: StubAuthenticateTokenUseCase,
    user_identity_resolver: UserIdentityResolver,
    category: CategoryUseCases,
    recipe: RecipeUseCases,
}

/// Real recipe services over the in-memory store, so route tests exercise
/// the access policy and validation end to end.
pub fn recipe_use_cases(store: &InMemoryRecipes, categories: &FakeCategories) -> RecipeUseCases {
    RecipeUseCases {
        create: Arc::new(CreateRecipeService::new(
            store.clone(),
            store.clone(),
            categories.clone(),
        )),
        get_list: Arc::new(GetRecipesService::new(store.clone())),
        get_single: Arc::new(GetSingleRecipeService::new(store.clone())),
        update: Arc::new(UpdateRecipeService::new(
            store.clone(),
            store.clone(),
            categories.clone(),
        )),
        delete: Arc::new(DeleteRecipeService::new(store.clone())),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            obtain_token: Arc::new(StubObtainTokenUseCase),
            authenticate_token: None,
            tokens: StubAuthenticateTokenUseCase::with_default_token(),
            user_identity_resolver: UserIdentityResolver::new(Arc::new(DummyUserQuery)),
            category: CategoryUseCases {
                create: Arc::new(StubCreateCategoryUseCase),
                get_list: Arc::new(StubGetCategoriesUseCase::success(vec![])),
                delete: Arc::new(StubDeleteCategoryUseCase::default()),
            },
            recipe: recipe_use_cases(&InMemoryRecipes::default(), &FakeCategories::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_obtain_token(mut self, uc: impl IObtainTokenUseCase + Send + Sync + 'static) -> Self {
        self.obtain_token = Arc::new(uc);
        self
    }

    pub fn with_authenticate_token(
        mut self,
        uc: impl IAuthenticateTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.authenticate_token = Some(Arc::new(uc));
        self
    }

    /// Accepts `key` as a token for `identity`, alongside the default test token.
    pub fn with_token(mut self, key: &str, identity: TokenIdentity) -> Self {
        self.tokens = self.tokens.with_token(key, identity);
        self
    }

    pub fn with_create_category(
        mut self,
        uc: impl CreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.create = Arc::new(uc);
        self
    }

    pub fn with_get_categories(
        mut self,
        uc: impl GetCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.get_list = Arc::new(uc);
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl DeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.delete = Arc::new(uc);
        self
    }

    /// Wires the recipe routes and the author-name lookup to `store`.
    pub fn with_recipe_store(mut self, store: InMemoryRecipes, categories: FakeCategories) -> Self {
        self.recipe = recipe_use_cases(&store, &categories);
        self.user_identity_resolver = UserIdentityResolver::new(Arc::new(store));
        self
    }

    pub fn with_recipe_use_cases(mut self, recipe: RecipeUseCases) -> Self {
        self.recipe = recipe;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let authenticate_token_use_case = match self.authenticate_token {
            Some(uc) => uc,
            None => Arc::new(self.tokens),
        };

        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            obtain_token_use_case: self.obtain_token,
            authenticate_token_use_case,
            user_identity_resolver: self.user_identity_resolver,
            category: self.category,
            recipe: self.recipe,
        })
    }
}
