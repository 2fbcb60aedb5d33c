use common::model::department::Department;
use common::model::employee::Employee;

use super::state::SortColumn;

#[derive(Clone)]
pub enum Msg {
    EmployeesLoaded(Vec<Employee>),
    DepartmentsLoaded(Vec<Department>),
    SetSearchQuery(String),
    RunSearch,
    SortBy(SortColumn),
    OpenAddDialog,
    OpenEditDialog(Employee),
    CancelDialog,
    EditField(FieldEdit),
    RequestSave,
    ConfirmSave,
    DeclineSave,
    SaveSucceeded,
    DeleteEmployee(i64),
}

/// A single-field change to the open edit buffer.
#[derive(Clone)]
pub enum FieldEdit {
    FirstName(String),
    DepartmentRef(i64),
    Experience(String),
    Dob(String),
}
