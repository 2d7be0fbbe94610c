use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "empId")]
    pub emp_id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    #[serde(rename = "empId")]
    pub emp_id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "PRESENT" => Some(AttendanceStatus::Present),
            "ABSENT" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Employee fields embedded in an attendance record by newer backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "empId")]
    pub emp_id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
}

/// The `employee` field of an attendance record. Older backends send the
/// bare primary key, newer ones embed the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    Embedded(EmployeeSummary),
    Id(i64),
}

impl EmployeeRef {
    pub fn id(&self) -> Option<i64> {
        match self {
            EmployeeRef::Id(id) => Some(*id),
            EmployeeRef::Embedded(summary) => summary.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee: EmployeeRef,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Display-ready employee data for one attendance row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmployee {
    pub emp_id: i64,
    pub full_name: String,
    pub department: String,
}

impl AttendanceRecord {
    pub fn resolve_employee(&self, employees: &[Employee]) -> Option<ResolvedEmployee> {
        let loaded = self
            .employee
            .id()
            .and_then(|id| employees.iter().find(|emp| emp.id == id));
        if let Some(emp) = loaded {
            return Some(ResolvedEmployee {
                emp_id: emp.emp_id,
                full_name: emp.full_name.clone(),
                department: emp.department.clone(),
            });
        }
        match &self.employee {
            EmployeeRef::Embedded(summary) => Some(ResolvedEmployee {
                emp_id: summary.emp_id,
                full_name: summary.full_name.clone(),
                department: summary.department.clone(),
            }),
            EmployeeRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee: Option<String>,
    pub department: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
}

impl AttendanceFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("employee", &self.employee),
            ("department", &self.department),
            ("date_from", &self.date_from),
            ("date_to", &self.date_to),
            ("status", &self.status),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .collect()
    }

    pub fn has_employee(&self) -> bool {
        self.employee
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }
}

/// A field error value is either a single message or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    pub fn joined(&self) -> String {
        match self {
            FieldMessages::One(message) => message.clone(),
            FieldMessages::Many(messages) => messages.join(", "),
        }
    }
}

/// Validation error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, FieldMessages>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_field_errors: Option<Vec<String>>,
}

impl ErrorBody {
    /// Lenient decode: anything that is not a recognisable error object
    /// becomes an empty body.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    pub fn message(&self) -> Option<String> {
        if let Some(errors) = &self.errors {
            let joined = errors
                .iter()
                .map(|(field, messages)| format!("{}: {}", field, messages.joined()))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        if let Some(first) = self.non_field_errors.as_ref().and_then(|list| list.first()) {
            return Some(first.clone());
        }
        self.detail.clone().filter(|detail| !detail.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Server responded with status {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Text shown to the user for a failed operation: field errors, then
    /// the first non-field error, then `detail`, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.body()
            .and_then(ErrorBody::message)
            .unwrap_or_else(|| fallback.to_string())
    }
}
