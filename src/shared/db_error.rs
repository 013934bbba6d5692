use sea_orm::{DbErr, SqlErr};

/// True when the error is a unique-constraint violation (SQLSTATE 23505).
///
/// `sql_err()` covers real driver errors; the string fallback covers
/// `DbErr::Custom` values produced by the mock connection in tests.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// True when the error is a foreign-key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}
