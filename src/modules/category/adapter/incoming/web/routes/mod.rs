mod create_category;
mod delete_category;
mod get_categories;

pub use create_category::*;
pub use delete_category::*;
pub use get_categories::*;
