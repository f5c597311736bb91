// Employee service enforces the business rules above raw storage access.
//
// Responsibilities
// - Reject creating an employee whose email is already on file.
// - Pass reads, updates and deletes straight through to the repository.
//
// The duplicate check and the insert are two separate round trips, so two concurrent
// creates with the same email can both succeed.

use crate::modules::employees::application::errors::ApplicationError;
use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeRepository;
use std::sync::Arc;

pub struct EmployeeService<TRepository>
where
    TRepository: EmployeeRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> EmployeeService<TRepository>
where
    TRepository: EmployeeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, ApplicationError> {
        if self
            .repository
            .find_by_email(&employee.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %employee.email, "Rejected employee with duplicate email");
            return Err(ApplicationError::ResourceExists {
                email: employee.email,
            });
        }

        let saved = self.repository.save(employee).await?;
        tracing::info!(id = ?saved.id, "Employee created");
        Ok(saved)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, ApplicationError> {
        let employees = self.repository.find_all().await?;
        tracing::debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, ApplicationError> {
        tracing::debug!(id, "Looking up employee");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Looks the employee up and turns absence into [`ApplicationError::NotFound`].
    pub async fn require_employee(&self, id: i64) -> Result<Employee, ApplicationError> {
        self.get_employee_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound { id })
    }

    pub async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, ApplicationError> {
        tracing::debug!(first_name, last_name, "Looking up employee by name");
        Ok(self.repository.find_by_name(first_name, last_name).await?)
    }

    /// Callers check existence first; an unknown id is written as a new row.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, ApplicationError> {
        let updated = self.repository.save(employee).await?;
        tracing::info!(id = ?updated.id, "Employee updated");
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApplicationError> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}
