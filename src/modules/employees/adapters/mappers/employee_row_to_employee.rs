use crate::modules::employees::adapters::outbound::sqlite::EmployeeRow;
use crate::modules::employees::core::employee::Employee;

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}
