// Shared test fixture for the Employee entity, seeded from a JSON file.

use crate::modules::employees::core::employee::Employee;
use std::fs;

const FIXTURE_PATH: &str = "./src/tests/fixtures/json/employee.json";

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

#[cfg(test)]
mod employee_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EmployeeBuilder::default().build();
        assert_eq!(built.id, None);
        assert_eq!(built.first_name, "Firdaouss");
        assert_eq!(built.last_name, "Lotfi");
        assert_eq!(built.email, "flotfi@astekgroup.ma");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EmployeeBuilder::new()
            .id(9)
            .first_name("John")
            .last_name("Cena")
            .email("cena@gmail.com")
            .build();

        assert_eq!(custom, Employee::new("John", "Cena", "cena@gmail.com").with_id(9));
    }
}
