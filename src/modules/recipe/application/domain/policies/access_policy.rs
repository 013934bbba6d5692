use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOperation {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Delete,
}

impl RecipeOperation {
    /// Read-only operations are open to everyone.
    pub fn is_safe(self) -> bool {
        matches!(self, RecipeOperation::List | RecipeOperation::Retrieve)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Authentication credentials were not provided")]
    AuthenticationRequired,

    #[error("Only the author may modify this recipe")]
    NotAuthor,
}

/// Author-or-read-only.
///
/// Anyone may read. Any authenticated user may create. Only the stored
/// author may update or delete an existing recipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeAccessPolicy;

impl RecipeAccessPolicy {
    /// Request-level check, run before the recipe is loaded.
    pub fn check_request(
        requester: Option<&UserId>,
        operation: RecipeOperation,
    ) -> Result<(), AccessDenied> {
        if operation.is_safe() || requester.is_some() {
            Ok(())
        } else {
            Err(AccessDenied::AuthenticationRequired)
        }
    }

    /// Object-level check against the stored author.
    pub fn check_object(
        requester: Option<&UserId>,
        operation: RecipeOperation,
        author: &UserId,
    ) -> Result<(), AccessDenied> {
        if operation.is_safe() {
            return Ok(());
        }

        match requester {
            None => Err(AccessDenied::AuthenticationRequired),
            Some(user) if user == author => Ok(()),
            Some(_) => Err(AccessDenied::NotAuthor),
        }
    }
}
