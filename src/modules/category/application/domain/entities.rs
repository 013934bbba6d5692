use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const CATEGORY_NAME_MAX_LEN: usize = 100;

/// A recipe category. Recipes keep existing when their category is deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
