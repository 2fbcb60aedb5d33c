use serde::{Deserialize, Serialize};

/// A single employee record as stored in the remote employee list.
///
/// Field names are serde-renamed to the wire schema of the list backend
/// (`Id`, `FirstName`, `DepartmentId`, `Experience`, `DOB`). The in-memory
/// value is always a snapshot of the last fetch and may be stale relative to
/// the store; no version or ETag is tracked.
///
/// `id == 0` is the "new, not yet saved" sentinel: the server assigns real
/// identifiers on create. `department_id` references a [`Department`] and may
/// be 0 when unset; it defaults on deserialization so records without a
/// department still decode. `dob` is an ISO-8601 date string passed through
/// verbatim.
///
/// [`Department`]: crate::model::department::Department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "DepartmentId", default)]
    pub department_id: i64,
    #[serde(rename = "Experience", default)]
    pub experience: String,
    #[serde(rename = "DOB", default)]
    pub dob: String,
}

impl Employee {
    /// Template for a record being created: zero id, everything else empty.
    pub fn unsaved() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            department_id: 0,
            experience: String::new(),
            dob: String::new(),
        }
    }

    /// True while the record has never been persisted (id sentinel 0).
    pub fn is_unsaved(&self) -> bool {
        self.id == 0
    }
}

/// Create/update payload for an employee.
///
/// The identifier is structurally excluded: the server assigns it on create
/// and it travels in the URL on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "DepartmentId")]
    pub department_id: i64,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "DOB")]
    pub dob: String,
}

impl From<&Employee> for EmployeeFields {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            department_id: employee.department_id,
            experience: employee.experience.clone(),
            dob: employee.dob.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "Id": 5,
            "FirstName": "Jo",
            "DepartmentId": 2,
            "Experience": "1y",
            "DOB": "2020-01-01"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 5);
        assert_eq!(employee.first_name, "Jo");
        assert_eq!(employee.department_id, 2);
        assert_eq!(employee.experience, "1y");
        assert_eq!(employee.dob, "2020-01-01");
    }

    #[test]
    fn missing_optional_columns_default() {
        let json = r#"{ "Id": 9, "FirstName": "Amy" }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.department_id, 0);
        assert_eq!(employee.experience, "");
        assert_eq!(employee.dob, "");
    }

    #[test]
    fn fields_payload_excludes_id() {
        let employee = Employee {
            id: 5,
            first_name: "Jo".to_string(),
            department_id: 2,
            experience: "1y".to_string(),
            dob: "2020-01-01".to_string(),
        };
        let value = serde_json::to_value(EmployeeFields::from(&employee)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("Id"));
        assert_eq!(object["FirstName"], "Jo");
        assert_eq!(object["DepartmentId"], 2);
        assert_eq!(object["Experience"], "1y");
        assert_eq!(object["DOB"], "2020-01-01");
    }

    #[test]
    fn unsaved_template_uses_zero_sentinel() {
        let employee = Employee::unsaved();
        assert!(employee.is_unsaved());
        assert_eq!(employee.department_id, 0);
        assert!(employee.first_name.is_empty());
    }
}
