//! Pure helpers behind the listing's derived state: name filtering, column
//! sorting, and the department lookup fold. Kept free of Yew and browser
//! types so they run under plain `cargo test`.

use std::collections::HashMap;

use common::model::department::Department;
use common::model::employee::Employee;

use super::state::{DepartmentOption, SortColumn};

/// Case-insensitive substring filter on first name, applied to the full set.
pub fn filter_by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee.first_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns a sorted copy of `rows`, leaving the input untouched. Natural
/// per-field comparison; stable, so ties keep their relative order.
pub fn copy_and_sort(rows: &[Employee], column: SortColumn, descending: bool) -> Vec<Employee> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::FirstName => a.first_name.cmp(&b.first_name),
            SortColumn::Department => a.department_id.cmp(&b.department_id),
            SortColumn::Experience => a.experience.cmp(&b.experience),
            SortColumn::Dob => a.dob.cmp(&b.dob),
        };
        if descending { ordering.reverse() } else { ordering }
    });
    sorted
}

/// Folds department records into the id -> title display lookup. A duplicate
/// id silently overwrites the earlier entry (last write wins).
pub fn department_names(items: &[Department]) -> HashMap<i64, String> {
    items.iter().fold(HashMap::new(), |mut map, item| {
        map.insert(item.id, item.title.clone());
        map
    })
}

/// Dropdown options in fetch order: id-as-string key, title label.
pub fn department_options(items: &[Department]) -> Vec<DepartmentOption> {
    items
        .iter()
        .map(|item| DepartmentOption {
            key: item.id.to_string(),
            label: item.title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: i64, name: &str) -> Employee {
        Employee {
            id,
            first_name: name.to_string(),
            department_id: 0,
            experience: String::new(),
            dob: String::new(),
        }
    }

    fn dept(id: i64, title: &str) -> Department {
        Department { id, title: title.to_string() }
    }

    #[test]
    fn filter_matches_substrings_ignoring_case() {
        let employees = vec![emp(1, "Bob"), emp(2, "Amy"), emp(3, "Sambo")];
        let hits = filter_by_name(&employees, "bo");
        let names: Vec<&str> = hits.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, ["Bob", "Sambo"]);

        assert!(filter_by_name(&employees, "zzz").is_empty());
        assert_eq!(filter_by_name(&employees, "").len(), 3);
    }

    #[test]
    fn sort_by_first_name_both_directions() {
        let rows = vec![emp(1, "Bob"), emp(2, "Amy"), emp(3, "Cal")];

        let ascending = copy_and_sort(&rows, SortColumn::FirstName, false);
        let names: Vec<&str> = ascending.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, ["Amy", "Bob", "Cal"]);

        let descending = copy_and_sort(&rows, SortColumn::FirstName, true);
        let names: Vec<&str> = descending.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, ["Cal", "Bob", "Amy"]);

        // Input order untouched.
        assert_eq!(rows[0].first_name, "Bob");
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let rows = vec![emp(1, "Amy"), emp(2, "Amy"), emp(3, "Amy")];
        let sorted = copy_and_sort(&rows, SortColumn::FirstName, false);
        let ids: Vec<i64> = sorted.iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn department_id_sorts_numerically() {
        let mut rows = vec![emp(1, "a"), emp(2, "b"), emp(3, "c")];
        rows[0].department_id = 10;
        rows[1].department_id = 2;
        rows[2].department_id = 1;
        let sorted = copy_and_sort(&rows, SortColumn::Department, false);
        let depts: Vec<i64> = sorted.iter().map(|e| e.department_id).collect();
        assert_eq!(depts, [1, 2, 10]);
    }

    #[test]
    fn lookup_fold_keeps_the_last_duplicate() {
        let map = department_names(&[dept(1, "HR"), dept(2, "IT"), dept(1, "People")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "People");
        assert_eq!(map[&2], "IT");
    }

    #[test]
    fn options_use_id_as_string_keys_in_fetch_order() {
        let options = department_options(&[dept(2, "IT"), dept(1, "HR")]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].key, "2");
        assert_eq!(options[0].label, "IT");
        assert_eq!(options[1].key, "1");
        assert_eq!(options[1].label, "HR");
    }
}
