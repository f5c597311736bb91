use crate::modules::employees::adapters::outbound::in_memory::InMemoryEmployeeRepository;
use crate::modules::employees::adapters::outbound::sqlite::SqliteEmployeeRepository;
use crate::modules::employees::application::service::EmployeeService;
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::shell::config::{Config, StorageKind};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService<dyn EmployeeRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(repository)),
        }
    }

    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repository: Arc<dyn EmployeeRepository> = match config.storage {
            StorageKind::Sqlite => Arc::new(
                SqliteEmployeeRepository::connect(
                    &config.database_url,
                    config.database_max_connections,
                )
                .await?,
            ),
            StorageKind::Memory => {
                tracing::warn!("Using in memory storage, employees are lost on shutdown");
                Arc::new(InMemoryEmployeeRepository::new())
            }
        };
        Ok(Self::new(repository))
    }
}
