#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee, EmployeeRef};
    use chrono::NaiveDate;

    pub fn employee(id: i64, emp_id: i64, full_name: &str) -> Employee {
        Employee {
            id,
            emp_id,
            full_name: full_name.to_string(),
            email: format!("{}@example.com", full_name.to_lowercase()),
            department: "Engineering".into(),
            created_at: None,
        }
    }

    pub fn record(id: i64, employee_id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee: EmployeeRef::Id(employee_id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status,
            created_at: None,
        }
    }
}
