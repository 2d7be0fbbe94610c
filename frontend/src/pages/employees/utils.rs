use crate::api::{Employee, EmployeePayload};
use regex::Regex;
use std::sync::LazyLock;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_EMP_ID: &str = "Employee ID must be a positive number";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";

pub const MSG_FETCH_FAILED: &str = "Failed to fetch employees. Please try again.";
pub const MSG_ADD_FAILED: &str = "Failed to add employee. Please try again.";
pub const MSG_UPDATE_FAILED: &str = "Failed to update employee. Please try again.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete employee. Please try again.";

/// Draft employee fields as typed into the registry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub emp_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            emp_id: employee.emp_id.to_string(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> Result<EmployeePayload, String> {
        let emp_id = self.emp_id.trim();
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        let department = self.department.trim();

        if emp_id.is_empty() || full_name.is_empty() || email.is_empty() || department.is_empty()
        {
            return Err(MSG_FIELDS_REQUIRED.into());
        }
        let emp_id = emp_id
            .parse::<i64>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| MSG_INVALID_EMP_ID.to_string())?;
        if !is_valid_email(email) {
            return Err(MSG_INVALID_EMAIL.into());
        }

        Ok(EmployeePayload {
            emp_id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        })
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeFormState {
        EmployeeFormState {
            emp_id: "101".into(),
            full_name: " Alice Example ".into(),
            email: "alice@example.com".into(),
            department: "Engineering ".into(),
        }
    }

    #[test]
    fn any_blank_field_is_rejected() {
        for blank in 0..4 {
            let mut form = filled();
            match blank {
                0 => form.emp_id.clear(),
                1 => form.full_name = "   ".into(),
                2 => form.email.clear(),
                _ => form.department.clear(),
            }
            assert_eq!(form.to_payload().unwrap_err(), MSG_FIELDS_REQUIRED);
        }
    }

    #[test]
    fn emp_id_must_be_positive_number() {
        let mut form = filled();
        form.emp_id = "abc".into();
        assert_eq!(form.to_payload().unwrap_err(), MSG_INVALID_EMP_ID);
        form.emp_id = "0".into();
        assert_eq!(form.to_payload().unwrap_err(), MSG_INVALID_EMP_ID);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["alice", "alice@", "alice@example", "@example.com", "a b@example.com"] {
            let mut form = filled();
            form.email = email.into();
            assert_eq!(form.to_payload().unwrap_err(), MSG_INVALID_EMAIL, "{}", email);
        }
    }

    #[test]
    fn valid_form_builds_trimmed_payload() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.emp_id, 101);
        assert_eq!(payload.full_name, "Alice Example");
        assert_eq!(payload.department, "Engineering");
    }

    #[test]
    fn email_pattern_accepts_common_addresses() {
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("trailing@example."));
    }

    #[test]
    fn from_employee_round_trips_into_form() {
        let employee = Employee {
            id: 4,
            emp_id: 77,
            full_name: "Bob".into(),
            email: "bob@example.com".into(),
            department: "Ops".into(),
            created_at: None,
        };
        let mut form = EmployeeFormState::from_employee(&employee);
        assert_eq!(form.emp_id, "77");
        form.reset();
        assert_eq!(form, EmployeeFormState::default());
    }
}
