//! Employee listing: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EmployeeListingProps`, `EmployeeListing`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, kick off the two initial fetches (employees and
//!   departments). The fetches are independent and unordered: each one
//!   replaces its own slice of state when it resolves, and a failure is
//!   logged and leaves the prior (empty) state in place. Until the department
//!   fetch lands, rows render with empty department names.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeListingProps;
pub use state::EmployeeListing;

use crate::api;

impl Component for EmployeeListing {
    type Message = Msg;
    type Properties = EmployeeListingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EmployeeListing::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_employees(&config).await {
                    Ok(items) => link.send_message(Msg::EmployeesLoaded(items)),
                    Err(err) => error!(format!("Error fetching employees: {err}")),
                }
            });

            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_departments(&config).await {
                    Ok(items) => link.send_message(Msg::DepartmentsLoaded(items)),
                    Err(err) => error!(format!("Error fetching departments: {err}")),
                }
            });
        }
    }
}
