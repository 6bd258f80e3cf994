//! MySQL implementation of the AccountRepository trait.
//!
//! Tables read by the sign-in flow:
//! - `users`: `id`, `tenant_id`, `entra_object_id`, `username`, `first_name`,
//!   `last_name`, `is_active`, `company_id`, `staff_id`
//! - `companies`: `id`, `name`, `is_active`
//! - `staff`: `id`, `email`
//! - `user_roles`: `user_id`, `role_id`, `is_active`, `expires_at`
//! - `roles`: `id`, `name`

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use tracing::error;

use hub_core::domain::entities::account::{Account, RoleAssignment};
use hub_core::errors::DomainError;
use hub_core::repositories::AccountRepository;

const ACCOUNT_COLUMNS: &str = r#"
    SELECT u.id AS user_id, u.tenant_id, u.entra_object_id, u.username,
           u.first_name, u.last_name, u.is_active,
           u.company_id, c.name AS company_name, c.is_active AS company_is_active,
           u.staff_id, s.email AS staff_email
    FROM users u
    INNER JOIN companies c ON c.id = u.company_id
    LEFT JOIN staff s ON s.id = u.staff_id
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            user_id: get(row, "user_id")?,
            tenant_id: get(row, "tenant_id")?,
            object_id: get(row, "entra_object_id")?,
            username: get(row, "username")?,
            first_name: get(row, "first_name")?,
            last_name: get(row, "last_name")?,
            is_active: get(row, "is_active")?,
            company_id: get(row, "company_id")?,
            company_name: get(row, "company_name")?,
            company_is_active: get(row, "company_is_active")?,
            staff_id: get(row, "staff_id")?,
            staff_email: get(row, "staff_email")?,
        })
    }

    async fn fetch_account(
        &self,
        condition: &str,
        tenant_id: &str,
        value: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "{} WHERE u.tenant_id = ? AND {} AND u.is_active = TRUE AND c.is_active = TRUE LIMIT 1",
            ACCOUNT_COLUMNS, condition
        );

        let row = sqlx::query(&query)
            .bind(tenant_id)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_object_id(
        &self,
        tenant_id: &str,
        object_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.fetch_account("u.entra_object_id = ?", tenant_id, object_id)
            .await
    }

    async fn find_by_username(
        &self,
        tenant_id: &str,
        username: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.fetch_account("LOWER(u.username) = ?", tenant_id, username)
            .await
    }

    async fn link_object_id(&self, user_id: i64, object_id: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET entra_object_id = ?
            WHERE id = ? AND (entra_object_id IS NULL OR TRIM(entra_object_id) = '')
        "#;

        let result = sqlx::query(query)
            .bind(object_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_role_assignments(&self, user_id: i64) -> Result<Vec<RoleAssignment>, DomainError> {
        let query = r#"
            SELECT r.name AS role_name, ur.is_active, ur.expires_at
            FROM user_roles ur
            INNER JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;

        rows.iter()
            .map(|row| {
                Ok(RoleAssignment {
                    role_name: get(row, "role_name")?,
                    is_active: get(row, "is_active")?,
                    expires_at: get::<Option<DateTime<Utc>>>(row, "expires_at")?,
                })
            })
            .collect()
    }
}

fn get<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column).map_err(|e| DomainError::Internal {
        message: format!("Failed to read column {}: {}", column, e),
    })
}

fn unavailable(e: sqlx::Error) -> DomainError {
    error!("Account query failed: {}", e);
    DomainError::database_unavailable()
}
