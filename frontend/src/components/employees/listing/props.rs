//! Properties for the employee listing component.
//!
//! The only input is the store configuration. Passing it in here (instead of
//! a process-global base address) keeps every network-facing detail explicit
//! at the point the component is mounted.

use yew::prelude::*;

use crate::api::StoreConfig;

/// Properties for [`EmployeeListing`](super::EmployeeListing).
#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeListingProps {
    /// Base URL, list names, and field projections for the two remote
    /// stores. Defaults to the same-origin `/api` service.
    #[prop_or_default]
    pub config: StoreConfig,
}
