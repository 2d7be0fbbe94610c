use crate::{
    api::{AttendanceFilter, AttendanceRecord, AttendanceStatus, Employee},
    utils::sort::SortState,
};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceSortField {
    EmpId,
    Date,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceState {
    pub attendance: Vec<AttendanceRecord>,
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub sort: SortState<AttendanceSortField>,
    pub show_filters: bool,
    pub applied_filter: Option<AttendanceFilter>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceState {
    pub fn set_loaded(&mut self, employees: Vec<Employee>, attendance: Vec<AttendanceRecord>) {
        self.employees = employees;
        self.attendance = attendance;
    }

    /// A newly marked record goes to the head of the list.
    pub fn prepend(&mut self, record: AttendanceRecord) {
        self.attendance.retain(|existing| existing.id != record.id);
        self.attendance.insert(0, record);
    }

    pub fn apply_filtered(&mut self, filter: AttendanceFilter, records: Vec<AttendanceRecord>) {
        self.attendance = records;
        self.applied_filter = Some(filter);
        self.show_filters = false;
    }

    /// Resets the sort and empties the displayed list without refetching.
    pub fn clear_filters(&mut self) {
        self.sort.clear();
        self.attendance.clear();
        self.applied_filter = None;
    }

    pub fn toggle_sort(&mut self, field: AttendanceSortField) {
        self.sort.toggle(field);
    }

    pub fn sorted(&self) -> Vec<AttendanceRecord> {
        let employees = &self.employees;
        self.sort.apply(&self.attendance, |field, a, b| {
            compare_records(field, a, b, employees)
        })
    }

    pub fn employee_filter_active(&self) -> bool {
        self.applied_filter
            .as_ref()
            .map(AttendanceFilter::has_employee)
            .unwrap_or(false)
    }

    pub fn show_empty_message(&self) -> bool {
        !self.loading && self.employee_filter_active() && self.attendance.is_empty()
    }

    pub fn counts(&self) -> StatusCounts {
        self.attendance
            .iter()
            .fold(StatusCounts::default(), |mut counts, record| {
                match record.status {
                    AttendanceStatus::Present => counts.present += 1,
                    AttendanceStatus::Absent => counts.absent += 1,
                }
                counts
            })
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }
}

fn resolved_emp_id(record: &AttendanceRecord, employees: &[Employee]) -> i64 {
    record
        .resolve_employee(employees)
        .map(|emp| emp.emp_id)
        .unwrap_or(0)
}

fn compare_records(
    field: AttendanceSortField,
    a: &AttendanceRecord,
    b: &AttendanceRecord,
    employees: &[Employee],
) -> Ordering {
    match field {
        AttendanceSortField::EmpId => {
            resolved_emp_id(a, employees).cmp(&resolved_emp_id(b, employees))
        }
        AttendanceSortField::Date => a.date.cmp(&b.date),
    }
}
