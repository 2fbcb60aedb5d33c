//! Modal overlays for the listing: the add/edit form dialog and the save
//! confirmation stacked above it. Which (if any) is visible follows directly
//! from the `DialogMode` on the state, so the two form dialogs can never show
//! at once.

use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::employee::Employee;

use super::messages::{FieldEdit, Msg};
use super::state::{DialogMode, EmployeeListing, SaveOrigin};

/// The add/edit form. Also rendered while the confirmation is up, underneath
/// it, so declining drops the user straight back into their edits.
pub fn form_dialog(component: &EmployeeListing, link: &Scope<EmployeeListing>) -> Html {
    let title = match component.dialog {
        DialogMode::Adding | DialogMode::Confirming(SaveOrigin::Add) => "Add Employee",
        DialogMode::Editing | DialogMode::Confirming(SaveOrigin::Edit) => "Edit Employee",
        DialogMode::None => return html! {},
    };
    let Some(buffer) = &component.buffer else {
        return html! {};
    };

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9000;display:flex;align-items:center;justify-content:center;">
            <div style="background:#fff;border-radius:4px;padding:24px;min-width:320px;box-shadow:0 4px 16px rgba(0,0,0,0.35);">
                <h2 style="margin-top:0;">{ title }</h2>
                { text_field(link, "First Name", buffer.first_name.clone(), FieldEdit::FirstName) }
                { department_select(component, buffer, link) }
                { text_field(link, "Experience", buffer.experience.clone(), FieldEdit::Experience) }
                { date_field(link, "DOB", buffer.dob.clone()) }
                <div style="display:flex;gap:8px;justify-content:flex-end;margin-top:16px;">
                    <button onclick={link.callback(|_| Msg::RequestSave)}>{"Save"}</button>
                    <button onclick={link.callback(|_| Msg::CancelDialog)}>{"Cancel"}</button>
                </div>
            </div>
        </div>
    }
}

/// The yes/no confirmation layered above the form dialog.
pub fn confirm_dialog(component: &EmployeeListing, link: &Scope<EmployeeListing>) -> Html {
    if !matches!(component.dialog, DialogMode::Confirming(_)) {
        return html! {};
    }

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9500;display:flex;align-items:center;justify-content:center;">
            <div style="background:#fff;border-radius:4px;padding:24px;min-width:280px;box-shadow:0 4px 16px rgba(0,0,0,0.35);">
                <h3 style="margin-top:0;">{"Confirm Save"}</h3>
                <p>{"Are you sure you want to save these changes?"}</p>
                <div style="display:flex;gap:8px;justify-content:flex-end;">
                    <button onclick={link.callback(|_| Msg::ConfirmSave)}>{"Yes"}</button>
                    <button onclick={link.callback(|_| Msg::DeclineSave)}>{"No"}</button>
                </div>
            </div>
        </div>
    }
}

fn text_field(
    link: &Scope<EmployeeListing>,
    label: &str,
    value: String,
    make: fn(String) -> FieldEdit,
) -> Html {
    html! {
        <label style="display:flex;flex-direction:column;font-size:13px;margin-bottom:10px;">
            { label }
            <input
                type="text"
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::EditField(make(e.target_unchecked_into::<HtmlInputElement>().value()))
                })}
            />
        </label>
    }
}

fn date_field(link: &Scope<EmployeeListing>, label: &str, value: String) -> Html {
    html! {
        <label style="display:flex;flex-direction:column;font-size:13px;margin-bottom:10px;">
            { label }
            <input
                type="date"
                value={value}
                oninput={link.callback(|e: InputEvent| {
                    Msg::EditField(FieldEdit::Dob(e.target_unchecked_into::<HtmlInputElement>().value()))
                })}
            />
        </label>
    }
}

fn department_select(
    component: &EmployeeListing,
    buffer: &Employee,
    link: &Scope<EmployeeListing>,
) -> Html {
    let selected = buffer.department_id.to_string();
    html! {
        <label style="display:flex;flex-direction:column;font-size:13px;margin-bottom:10px;">
            {"Department"}
            <select onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::EditField(FieldEdit::DepartmentRef(value.parse().unwrap_or(0)))
            })}>
                <option value="0" selected={selected == "0"}></option>
                {
                    for component.department_options.iter().map(|option| html! {
                        <option value={option.key.clone()} selected={option.key == selected}>
                            { option.label.clone() }
                        </option>
                    })
                }
            </select>
        </label>
    }
}
