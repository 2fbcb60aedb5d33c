//! View rendering for the employee listing component.
//!
//! Renders the search bar, the employee table, and whichever dialog overlays
//! the current `DialogMode` calls for. Department cells resolve their display
//! name through the lookup on the state; an unresolved reference renders as
//! an empty cell. Data column headers carry the sort affordance, with the
//! single active column showing a direction arrow.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::employee::Employee;

use super::dialogs::{confirm_dialog, form_dialog};
use super::messages::Msg;
use super::state::{EmployeeListing, SortColumn};

pub fn view(component: &EmployeeListing, ctx: &Context<EmployeeListing>) -> Html {
    let link = ctx.link();
    html! {
        <div class="employee-listing">
            { build_search_bar(component, link) }
            { build_table(component, link) }
            { form_dialog(component, link) }
            { confirm_dialog(component, link) }
        </div>
    }
}

fn build_search_bar(component: &EmployeeListing, link: &Scope<EmployeeListing>) -> Html {
    html! {
        <div style="display:flex;gap:8px;align-items:flex-end;margin-bottom:10px;">
            <label style="display:flex;flex-direction:column;font-size:13px;">
                {"Search by Name"}
                <input
                    type="text"
                    value={component.search_query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetSearchQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <button onclick={link.callback(|_| Msg::RunSearch)}>{"Search"}</button>
            <button onclick={link.callback(|_| Msg::OpenAddDialog)}>{"Add Employee"}</button>
        </div>
    }
}

fn build_table(component: &EmployeeListing, link: &Scope<EmployeeListing>) -> Html {
    html! {
        <table style="width:100%;border-collapse:collapse;">
            <thead>
                <tr>
                    <th style="text-align:left;">{"Actions"}</th>
                    { sortable_header(component, link, "First Name", SortColumn::FirstName) }
                    { sortable_header(component, link, "Department", SortColumn::Department) }
                    { sortable_header(component, link, "Experience", SortColumn::Experience) }
                    { sortable_header(component, link, "DOB", SortColumn::Dob) }
                </tr>
            </thead>
            <tbody>
                { for component.filtered.iter().map(|employee| build_row(component, link, employee)) }
            </tbody>
        </table>
    }
}

fn sortable_header(
    component: &EmployeeListing,
    link: &Scope<EmployeeListing>,
    label: &str,
    column: SortColumn,
) -> Html {
    let indicator = match component.sort {
        Some(active) if active.column == column => {
            if active.descending { " \u{25bc}" } else { " \u{25b2}" }
        }
        _ => "",
    };
    html! {
        <th
            style="text-align:left;cursor:pointer;user-select:none;"
            onclick={link.callback(move |_| Msg::SortBy(column))}
        >
            { format!("{label}{indicator}") }
        </th>
    }
}

fn build_row(component: &EmployeeListing, link: &Scope<EmployeeListing>, employee: &Employee) -> Html {
    let id = employee.id;
    let row = employee.clone();
    html! {
        <tr style="border-top:1px solid #ddd;">
            <td>
                { icon_button("delete", "Delete", link.callback(move |_| Msg::DeleteEmployee(id))) }
                { icon_button("edit", "Edit", link.callback(move |_| Msg::OpenEditDialog(row.clone()))) }
            </td>
            <td>{ employee.first_name.clone() }</td>
            <td>{ component.department_title(employee.department_id) }</td>
            <td>{ employee.experience.clone() }</td>
            <td>{ employee.dob.clone() }</td>
        </tr>
    }
}

/// Renders a row-action button with a Material icon.
fn icon_button(icon_name: &str, title: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" title={title.to_string()} onclick={on_click}>
            <i class="material-icons">{icon_name}</i>
        </button>
    }
}
