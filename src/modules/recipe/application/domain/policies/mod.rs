mod access_policy;

pub use access_policy::{AccessDenied, RecipeAccessPolicy, RecipeOperation};
