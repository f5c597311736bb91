// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the storage capability for employees as a trait.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - An in memory implementation backs the service and http tests.

use crate::modules::employees::core::employee::Employee;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;

    /// Lowest id wins when several employees share the same name.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, RepositoryError>;

    /// Inserts when `employee.id` is `None`, otherwise writes the row keyed by that id.
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
