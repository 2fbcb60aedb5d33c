//! Update function for the employee listing component.
//!
//! Elm-style: receives the current `EmployeeListing` state, the `Context`,
//! and a `Msg`, mutates the state, and returns whether the view should
//! re-render. Synchronous transitions live on the state struct; this module
//! adds the network side effects around them.
//!
//! Every remote failure is logged to the console and otherwise absorbed: the
//! lists stay stale and an open dialog stays open with the user's edits
//! intact so they may retry. Mutations never patch the local sets; on success
//! the full employee list is re-fetched once to resynchronize.

use gloo_console::error;
use yew::prelude::*;

use common::model::employee::EmployeeFields;

use crate::api;

use super::messages::Msg;
use super::state::EmployeeListing;

pub fn update(component: &mut EmployeeListing, ctx: &Context<EmployeeListing>, msg: Msg) -> bool {
    match msg {
        Msg::EmployeesLoaded(items) => {
            component.set_employees(items);
            true
        }
        Msg::DepartmentsLoaded(items) => {
            component.set_departments(items);
            true
        }
        Msg::SetSearchQuery(query) => {
            component.search_query = query;
            true
        }
        Msg::RunSearch => {
            component.apply_search();
            true
        }
        Msg::SortBy(column) => {
            component.apply_sort(column);
            true
        }
        Msg::OpenAddDialog => {
            component.open_add();
            true
        }
        Msg::OpenEditDialog(employee) => {
            component.open_edit(employee);
            true
        }
        Msg::CancelDialog => {
            component.cancel_dialog();
            true
        }
        Msg::EditField(edit) => {
            component.apply_field(edit);
            true
        }
        Msg::RequestSave => {
            component.request_save();
            true
        }
        Msg::DeclineSave => {
            component.decline_save();
            true
        }
        Msg::ConfirmSave => {
            // The confirmation dialog closes right away; the form dialog
            // underneath waits for the network result.
            if let Some(buffer) = component.begin_confirmed_save() {
                let config = ctx.props().config.clone();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let fields = EmployeeFields::from(&buffer);
                    let saved = if buffer.is_unsaved() {
                        api::create_employee(&config, &fields).await.map(|_| ())
                    } else {
                        api::update_employee(&config, buffer.id, &fields).await
                    };
                    match saved {
                        Ok(()) => {
                            link.send_message(Msg::SaveSucceeded);
                            match api::list_employees(&config).await {
                                Ok(items) => link.send_message(Msg::EmployeesLoaded(items)),
                                Err(err) => error!(format!("Error fetching employees: {err}")),
                            }
                        }
                        Err(err) => error!(format!("Error saving employee: {err}")),
                    }
                });
            }
            true
        }
        Msg::SaveSucceeded => {
            component.finish_save();
            true
        }
        Msg::DeleteEmployee(id) => {
            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_employee(&config, id).await {
                    Ok(()) => match api::list_employees(&config).await {
                        Ok(items) => link.send_message(Msg::EmployeesLoaded(items)),
                        Err(err) => error!(format!("Error fetching employees: {err}")),
                    },
                    Err(err) => error!(format!("Error deleting employee: {err}")),
                }
            });
            false
        }
    }
}
