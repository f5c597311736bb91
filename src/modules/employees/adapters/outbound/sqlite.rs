// SQLite implementation of the EmployeeRepository port.
//
// Responsibilities
// - Own the connection pool and apply the embedded migrations.
// - Map the `employees` table onto the Employee entity.

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::{EmployeeRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const SELECT_COLUMNS: &str = "SELECT id, first_name, last_name, email FROM employees";

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        RepositoryError::Backend(error.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for RepositoryError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        RepositoryError::Backend(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `database_url` and migrates it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(database_url, max_connections, "Database connection established");

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Every connection to `sqlite::memory:` sees its own database, so the pool is pinned
    /// to a single connection that is never recycled.
    pub async fn connect_in_memory() -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE email = ? ORDER BY id LIMIT 1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "{SELECT_COLUMNS} WHERE first_name = ? AND last_name = ? ORDER BY id LIMIT 1"
        ))
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Employee::from))
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let row: EmployeeRow = match employee.id {
            None => {
                sqlx::query_as(
                    "INSERT INTO employees (first_name, last_name, email) VALUES (?, ?, ?) \
                     RETURNING id, first_name, last_name, email",
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as(
                    "INSERT INTO employees (id, first_name, last_name, email) VALUES (?, ?, ?, ?) \
                     ON CONFLICT(id) DO UPDATE SET first_name = excluded.first_name, \
                     last_name = excluded.last_name, email = excluded.email \
                     RETURNING id, first_name, last_name, email",
                )
                .bind(id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
