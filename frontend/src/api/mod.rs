//! HTTP client for the two remote list stores.
//!
//! The listing component never talks to the network directly: every remote
//! call goes through the functions here, awaited inside
//! `yew::platform::spawn_local` with the outcome forwarded back to the
//! component as a message.
//!
//! The backend is a plain JSON list-data service:
//! - `GET    {base}/lists/{list}/items?select=F1,F2,...` -> array of records
//! - `POST   {base}/lists/{list}/items` -> created record (server assigns Id)
//! - `PATCH  {base}/lists/{list}/items/{id}` -> no body
//! - `DELETE {base}/lists/{list}/items/{id}` -> no body
//!
//! There is no retry, timeout, or cancellation here: a request that never
//! resolves simply never delivers its message.

use common::model::department::Department;
use common::model::employee::{Employee, EmployeeFields};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::fmt;

/// Connection settings for both stores, passed into the listing component as
/// a prop and threaded through every call. Replaces the process-global base
/// address setup the component would otherwise need.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Base URL of the list-data service, without a trailing slash.
    pub base_url: String,
    /// List holding employee records.
    pub employee_list: String,
    /// List holding department records.
    pub department_list: String,
    /// Field projection requested on every employee list fetch.
    pub employee_fields: Vec<String>,
    /// Field projection requested on every department list fetch.
    pub department_fields: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            employee_list: "Employees".to_string(),
            department_list: "Departments".to_string(),
            employee_fields: ["Id", "FirstName", "DepartmentId", "Experience", "DOB"]
                .into_iter()
                .map(String::from)
                .collect(),
            department_fields: ["Id", "Title"].into_iter().map(String::from).collect(),
        }
    }
}

impl StoreConfig {
    /// Collection endpoint for a list.
    pub fn items_url(&self, list: &str) -> String {
        format!("{}/lists/{}/items", self.base_url.trim_end_matches('/'), list)
    }

    /// Single-item endpoint for a list.
    pub fn item_url(&self, list: &str, id: i64) -> String {
        format!("{}/{}", self.items_url(list), id)
    }
}

/// Failure of a remote store call.
#[derive(Debug)]
pub enum StoreError {
    /// Transport or decode failure before a usable response existed.
    Network(gloo_net::Error),
    /// The service refused the request (HTTP 401/403).
    Denied(u16),
    /// Any other non-success HTTP status.
    Status(u16),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(err) => write!(f, "network error: {err}"),
            StoreError::Denied(status) => write!(f, "permission denied (status {status})"),
            StoreError::Status(status) => write!(f, "unexpected status {status}"),
        }
    }
}

impl From<gloo_net::Error> for StoreError {
    fn from(err: gloo_net::Error) -> Self {
        StoreError::Network(err)
    }
}

fn status_error(status: u16) -> Option<StoreError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(StoreError::Denied(status)),
        other => Some(StoreError::Status(other)),
    }
}

fn checked(response: Response) -> Result<Response, StoreError> {
    match status_error(response.status()) {
        None => Ok(response),
        Some(err) => Err(err),
    }
}

async fn fetch_list<T: DeserializeOwned>(
    config: &StoreConfig,
    list: &str,
    fields: &[String],
) -> Result<Vec<T>, StoreError> {
    let url = format!("{}?select={}", config.items_url(list), fields.join(","));
    let response = checked(Request::get(&url).send().await?)?;
    Ok(response.json().await?)
}

/// Fetches all employees with the configured projection, in server order.
pub async fn list_employees(config: &StoreConfig) -> Result<Vec<Employee>, StoreError> {
    fetch_list(config, &config.employee_list, &config.employee_fields).await
}

/// Fetches all departments with the configured projection.
pub async fn list_departments(config: &StoreConfig) -> Result<Vec<Department>, StoreError> {
    fetch_list(config, &config.department_list, &config.department_fields).await
}

/// Creates an employee from the four editable fields; the server assigns the
/// identifier and returns the stored record.
pub async fn create_employee(
    config: &StoreConfig,
    fields: &EmployeeFields,
) -> Result<Employee, StoreError> {
    let url = config.items_url(&config.employee_list);
    let response = checked(Request::post(&url).json(fields)?.send().await?)?;
    Ok(response.json().await?)
}

/// Overwrites the four editable fields of an existing employee.
pub async fn update_employee(
    config: &StoreConfig,
    id: i64,
    fields: &EmployeeFields,
) -> Result<(), StoreError> {
    let url = config.item_url(&config.employee_list, id);
    checked(Request::patch(&url).json(fields)?.send().await?)?;
    Ok(())
}

/// Deletes an employee by identifier.
pub async fn delete_employee(config: &StoreConfig, id: i64) -> Result<(), StoreError> {
    let url = config.item_url(&config.employee_list, id);
    checked(Request::delete(&url).send().await?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_projected_list_url() {
        let config = StoreConfig::default();
        let url = format!(
            "{}?select={}",
            config.items_url(&config.employee_list),
            config.employee_fields.join(",")
        );
        assert_eq!(
            url,
            "/api/lists/Employees/items?select=Id,FirstName,DepartmentId,Experience,DOB"
        );
    }

    #[test]
    fn item_url_appends_id() {
        let config = StoreConfig {
            base_url: "https://lists.example/api/".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(
            config.item_url(&config.employee_list, 7),
            "https://lists.example/api/lists/Employees/items/7"
        );
    }

    #[test]
    fn status_classification() {
        assert!(status_error(200).is_none());
        assert!(status_error(204).is_none());
        assert!(matches!(status_error(401), Some(StoreError::Denied(401))));
        assert!(matches!(status_error(403), Some(StoreError::Denied(403))));
        assert!(matches!(status_error(500), Some(StoreError::Status(500))));
        assert!(matches!(status_error(404), Some(StoreError::Status(404))));
    }

    #[test]
    fn error_display_names_the_status() {
        assert_eq!(
            StoreError::Denied(403).to_string(),
            "permission denied (status 403)"
        );
        assert_eq!(StoreError::Status(500).to_string(), "unexpected status 500");
    }
}
