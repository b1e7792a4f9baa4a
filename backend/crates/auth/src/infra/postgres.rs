//! PostgreSQL Employee Directory

use sqlx::PgPool;

use crate::domain::entity::{Employee, NewEmployee};
use crate::domain::repository::EmployeeRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed employee directory
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for PgEmployeeRepository {
    async fn find_active_by_username(&self, username: &str) -> AuthResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                username,
                password_hash,
                full_name,
                is_active
            FROM employees
            WHERE username = $1 AND is_active = TRUE
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn create(&self, new: &NewEmployee) -> AuthResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (username, password_hash, full_name, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING employee_id, username, password_hash, full_name, is_active
            "#,
        )
        .bind(&new.username)
        .bind(&new.password_hash)
        .bind(&new.full_name)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_employee())
    }

    async fn count(&self) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: i32,
    username: String,
    password_hash: String,
    full_name: String,
    is_active: bool,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            employee_id: self.employee_id,
            username: self.username,
            password_hash: self.password_hash,
            full_name: self.full_name,
            is_active: self.is_active,
        }
    }
}
