use crate::{api::Employee, utils::sort::SortState};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortField {
    EmpId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeesState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub sort: SortState<EmployeeSortField>,
    pub editing_id: Option<i64>,
    pub open_menu: Option<i64>,
    pub pending_delete: Option<Employee>,
}

impl EmployeesState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    /// A newly created employee goes to the head of the list.
    pub fn prepend(&mut self, employee: Employee) {
        self.employees.retain(|existing| existing.id != employee.id);
        self.employees.insert(0, employee);
    }

    pub fn replace(&mut self, employee: Employee) -> bool {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.employees.retain(|employee| employee.id != id);
        if self.open_menu == Some(id) {
            self.open_menu = None;
        }
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
    }

    pub fn toggle_sort(&mut self, field: EmployeeSortField) {
        self.sort.toggle(field);
    }

    pub fn sorted(&self) -> Vec<Employee> {
        self.sort.apply(&self.employees, compare_employees)
    }

    pub fn toggle_menu(&mut self, id: i64) {
        self.open_menu = if self.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}

fn compare_employees(field: EmployeeSortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        EmployeeSortField::EmpId => a.emp_id.cmp(&b.emp_id),
    }
}
