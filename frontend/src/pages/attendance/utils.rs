use crate::{
    api::{AttendanceFilter, AttendanceStatus, CreateAttendance},
    utils::time::{format_date, parse_date, today_local},
};
use chrono::NaiveDate;

pub const MSG_SELECT_EMPLOYEE: &str = "Please select an employee";
pub const MSG_INVALID_DATE: &str = "Please select a valid date";
pub const MSG_RANGE_ORDER: &str = "Start date must be on or before end date";

pub const MSG_FETCH_FAILED: &str = "Failed to fetch attendance. Please try again.";
pub const MSG_MARK_FAILED: &str = "Failed to mark attendance. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub employee: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::for_date(today_local())
    }
}

impl AttendanceFormState {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            employee: String::new(),
            date: format_date(date),
            status: AttendanceStatus::Present,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> Result<CreateAttendance, String> {
        let employee_id = self
            .employee
            .trim()
            .parse::<i64>()
            .map_err(|_| MSG_SELECT_EMPLOYEE.to_string())?;
        let date = parse_date(&self.date).ok_or_else(|| MSG_INVALID_DATE.to_string())?;
        Ok(CreateAttendance {
            employee_id,
            date,
            status: self.status,
        })
    }
}

/// Filter inputs as typed into the popover; blank means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilterState {
    pub employee: String,
    pub department: String,
    pub date_from: String,
    pub date_to: String,
    pub status: String,
}

impl AttendanceFilterState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_filter(&self) -> Result<AttendanceFilter, String> {
        let from = parse_optional_date(&self.date_from)?;
        let to = parse_optional_date(&self.date_to)?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(MSG_RANGE_ORDER.into());
            }
        }
        Ok(self.to_filter_unchecked())
    }

    fn to_filter_unchecked(&self) -> AttendanceFilter {
        AttendanceFilter {
            employee: non_empty(&self.employee),
            department: non_empty(&self.department),
            date_from: non_empty(&self.date_from),
            date_to: non_empty(&self.date_to),
            status: non_empty(&self.status),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .ok_or_else(|| MSG_INVALID_DATE.to_string())
}
