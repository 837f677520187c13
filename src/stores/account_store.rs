//! Account registration and lookup.
//!
//! Every operation comes in two shapes. The plain methods collapse all
//! failures into an absence sentinel (`None` / `0`) after reporting them to
//! the diagnostics sink, so route handlers only ever deal with presence or
//! absence. The `try_*` methods keep the failure: `Err` means the statement
//! failed, `Ok(None)` means it ran and matched nothing.

use std::sync::Arc;

use sqlx::PgPool;

use crate::diag::{Diagnostics, TracingDiagnostics};
use crate::error::StoreResult;
use crate::models::AccountModel;

pub struct AccountStore {
    pool: PgPool,
    diag: Arc<dyn Diagnostics>,
}

impl AccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_diagnostics(pool, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(pool: PgPool, diag: Arc<dyn Diagnostics>) -> Self {
        Self { pool, diag }
    }

    /// Inserts a new account with account_type fixed to 'Client' and returns
    /// the inserted row. `None` on any datastore failure, including a
    /// duplicate email rejected by the schema's UNIQUE constraint.
    pub async fn register_account(
        &self,
        firstname: &str,
        lastname: &str,
        email: &str,
        password: &str,
    ) -> Option<AccountModel> {
        match self
            .try_register_account(firstname, lastname, email, password)
            .await
        {
            Ok(account) => Some(account),
            Err(e) => {
                self.diag.store_error("register_account", &e);
                None
            }
        }
    }

    pub async fn try_register_account(
        &self,
        firstname: &str,
        lastname: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<AccountModel> {
        let account = sqlx::query_as(
            "INSERT INTO account \
             (account_firstname, account_lastname, account_email, account_password, account_type) \
             VALUES ($1, $2, $3, $4, 'Client') \
             RETURNING account_id, account_firstname, account_lastname, \
             account_email, account_password, account_type",
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    /// Number of accounts registered under `email`. `0` on failure, which
    /// callers cannot tell apart from a genuinely free email.
    ///
    /// The check-then-register protocol built on this is racy; the UNIQUE
    /// constraint on account_email is what actually prevents duplicates.
    pub async fn check_existing_email(&self, email: &str) -> i64 {
        match self.try_check_existing_email(email).await {
            Ok(count) => count,
            Err(e) => {
                self.diag.store_error("check_existing_email", &e);
                0
            }
        }
    }

    pub async fn try_check_existing_email(&self, email: &str) -> StoreResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM account WHERE account_email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// The account registered under `email`, or `None` when absent or on
    /// failure.
    pub async fn get_account_by_email(&self, email: &str) -> Option<AccountModel> {
        match self.try_get_account_by_email(email).await {
            Ok(found) => found,
            Err(e) => {
                self.diag.store_error("get_account_by_email", &e);
                None
            }
        }
    }

    pub async fn try_get_account_by_email(&self, email: &str) -> StoreResult<Option<AccountModel>> {
        let account = sqlx::query_as(
            "SELECT account_id, account_firstname, account_lastname, \
             account_email, account_password, account_type \
             FROM account WHERE account_email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::RecordingDiagnostics;
    use crate::test_support::unreachable_pool;

    #[tokio::test]
    async fn register_account_collapses_failure_to_none() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = AccountStore::with_diagnostics(unreachable_pool(), diag.clone());

        let result = store
            .register_account("Tony", "Stark", "tony@starkent.com", "Iam1ronM@n")
            .await;

        assert!(result.is_none());
        assert_eq!(diag.operations(), vec!["register_account"]);
    }

    #[tokio::test]
    async fn check_existing_email_collapses_failure_to_zero() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = AccountStore::with_diagnostics(unreachable_pool(), diag.clone());

        assert_eq!(store.check_existing_email("tony@starkent.com").await, 0);
        assert_eq!(diag.operations(), vec!["check_existing_email"]);
    }

    #[tokio::test]
    async fn get_account_by_email_collapses_failure_to_none() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = AccountStore::with_diagnostics(unreachable_pool(), diag.clone());

        assert!(store.get_account_by_email("tony@starkent.com").await.is_none());
        assert_eq!(diag.operations(), vec!["get_account_by_email"]);
    }

    #[tokio::test]
    async fn try_surface_keeps_the_failure() {
        let store = AccountStore::new(unreachable_pool());

        let err = store
            .try_check_existing_email("tony@starkent.com")
            .await
            .unwrap_err();

        // Connectivity failure, not a constraint violation.
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
    }
}
