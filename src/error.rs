use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the failure is a UNIQUE constraint violation, e.g. a
    /// duplicate account_email.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }

    /// True when the failure is a FOREIGN KEY violation, e.g. an inventory
    /// row pointing at a classification_id that does not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(e)) => e.is_foreign_key_violation(),
            _ => false,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_a_constraint_violation() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
    }

    #[test]
    fn error_message_names_the_database() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }
}
