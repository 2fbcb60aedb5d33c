//! Component state for the employee listing.
//!
//! This module defines the state struct holding the listing's runtime data
//! (the fetched employee sets, search and sort state, dialog mode, edit
//! buffer, and the department lookup), along with the pure state transitions
//! that `update.rs` dispatches to. Everything here is synchronous and free of
//! network and DOM access, which is what makes the transitions unit-testable
//! on the host.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules.

use std::collections::HashMap;

use common::model::department::Department;
use common::model::employee::Employee;

use super::helpers::{copy_and_sort, department_names, department_options, filter_by_name};
use super::messages::FieldEdit;

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    FirstName,
    Department,
    Experience,
    Dob,
}

/// The single active sort, if any. Holding this as one value (rather than a
/// flag per column) makes "at most one sorted column" true by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub descending: bool,
}

/// Which form dialog a pending save confirmation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrigin {
    Add,
    Edit,
}

/// The one dialog overlay currently shown. `Confirming` keeps its origin so
/// the form dialog stays visible underneath the confirmation and is restored
/// when the confirmation closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    None,
    Adding,
    Editing,
    Confirming(SaveOrigin),
}

impl From<SaveOrigin> for DialogMode {
    fn from(origin: SaveOrigin) -> Self {
        match origin {
            SaveOrigin::Add => DialogMode::Adding,
            SaveOrigin::Edit => DialogMode::Editing,
        }
    }
}

/// One entry of the department dropdown: id-as-string key, title label.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentOption {
    pub key: String,
    pub label: String,
}

/// Main state container for the employee listing component.
pub struct EmployeeListing {
    /// Last successful fetch result, in server order.
    pub employees: Vec<Employee>,

    /// Currently rendered set. Derived from `employees` by the last-applied
    /// search or sort action; the two are not composed automatically.
    pub filtered: Vec<Employee>,

    /// Current content of the search input. Filtering only happens when the
    /// search action fires, not as the user types.
    pub search_query: String,

    /// The active sort column and direction, if a sort has been applied.
    pub sort: Option<SortState>,

    /// Which dialog overlay is open.
    pub dialog: DialogMode,

    /// Working copy of the employee being added or edited. `Some` exactly
    /// while a dialog is open; discarded on cancel, never merged back.
    pub buffer: Option<Employee>,

    /// Department id -> title, rebuilt wholesale on every department fetch.
    pub department_names: HashMap<i64, String>,

    /// Dropdown options derived from the same fetch.
    pub department_options: Vec<DepartmentOption>,

    /// Guard so the first-render load runs only once.
    pub loaded: bool,
}

impl EmployeeListing {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            sort: None,
            dialog: DialogMode::None,
            buffer: None,
            department_names: HashMap::new(),
            department_options: Vec::new(),
            loaded: false,
        }
    }

    /// Replaces both employee sets with a fresh fetch result. Any previously
    /// applied search or sort is dropped along with the old view.
    pub fn set_employees(&mut self, items: Vec<Employee>) {
        self.filtered = items.clone();
        self.employees = items;
    }

    /// Rebuilds the department lookup and dropdown options from a fetch.
    /// Later duplicate ids overwrite earlier ones.
    pub fn set_departments(&mut self, items: Vec<Department>) {
        self.department_names = department_names(&items);
        self.department_options = department_options(&items);
    }

    /// Display name for a department reference; empty when unresolved (the
    /// department fetch has not landed, or the id has no matching entry).
    pub fn department_title(&self, id: i64) -> String {
        self.department_names.get(&id).cloned().unwrap_or_default()
    }

    /// Filters the full set by the current query, replacing the visible set.
    pub fn apply_search(&mut self) {
        self.filtered = filter_by_name(&self.employees, &self.search_query);
    }

    /// Sorts the currently visible set by `column`. A repeated click on the
    /// active column flips its direction; a different column becomes the
    /// single active one, starting ascending.
    pub fn apply_sort(&mut self, column: SortColumn) {
        let descending = match self.sort {
            Some(active) if active.column == column => !active.descending,
            _ => false,
        };
        self.sort = Some(SortState { column, descending });
        self.filtered = copy_and_sort(&self.filtered, column, descending);
    }

    pub fn open_add(&mut self) {
        self.dialog = DialogMode::Adding;
        self.buffer = Some(Employee::unsaved());
    }

    pub fn open_edit(&mut self, employee: Employee) {
        self.dialog = DialogMode::Editing;
        self.buffer = Some(employee);
    }

    /// Closes whatever dialog is open and discards the buffer.
    pub fn cancel_dialog(&mut self) {
        self.dialog = DialogMode::None;
        self.buffer = None;
    }

    /// Applies a single-field change to the edit buffer. The full and
    /// filtered sets are never touched from here.
    pub fn apply_field(&mut self, edit: FieldEdit) {
        if let Some(buffer) = &mut self.buffer {
            match edit {
                FieldEdit::FirstName(value) => buffer.first_name = value,
                FieldEdit::DepartmentRef(value) => buffer.department_id = value,
                FieldEdit::Experience(value) => buffer.experience = value,
                FieldEdit::Dob(value) => buffer.dob = value,
            }
        }
    }

    /// Save was clicked in a form dialog: layer the confirmation above it.
    pub fn request_save(&mut self) {
        self.dialog = match self.dialog {
            DialogMode::Adding => DialogMode::Confirming(SaveOrigin::Add),
            DialogMode::Editing => DialogMode::Confirming(SaveOrigin::Edit),
            other => other,
        };
    }

    /// The confirmation was declined: drop back to the form dialog with the
    /// buffer untouched, so the user may retry Save.
    pub fn decline_save(&mut self) {
        if let DialogMode::Confirming(origin) = self.dialog {
            self.dialog = origin.into();
        }
    }

    /// The confirmation was accepted. Closes the confirmation immediately
    /// (the form dialog stays open until the request succeeds) and hands the
    /// caller a copy of the buffer to send. Returns `None` when no
    /// confirmation was pending.
    pub fn begin_confirmed_save(&mut self) -> Option<Employee> {
        match self.dialog {
            DialogMode::Confirming(origin) => {
                self.dialog = origin.into();
                self.buffer.clone()
            }
            _ => None,
        }
    }

    /// The save round-trip succeeded: close the form dialog for good.
    pub fn finish_save(&mut self) {
        self.dialog = DialogMode::None;
        self.buffer = None;
    }
}

impl Default for EmployeeListing {
    fn default() -> Self {
        Self::new()
    }
}
