// In memory implementation of the EmployeeRepository port.
//
// Purpose
// - Support service and http tests, and local development without a database.
//
// Responsibilities
// - Keep employees in a map ordered by id.
// - Hand out ids the way an auto increment column does.

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::{EmployeeRepository, RepositoryError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: RwLock<BTreeMap<i64, Employee>>,
    last_id: AtomicI64,
    save_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Employee repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.values().find(|e| e.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        let id = match employee.id {
            Some(id) => {
                self.last_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => {
                let previous = self
                    .last_id
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
                    .map_err(|_| RepositoryError::Backend("id space exhausted".into()))?;
                previous + 1
            }
        };
        employee.id = Some(id);

        self.rows.write().await.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
