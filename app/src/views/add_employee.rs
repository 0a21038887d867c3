use dioxus::prelude::*;
use types::employee::{DEPARTMENTS, DESIGNATIONS, EmployeeDraft};

use crate::Route;
use crate::use_create_employee;

/// Add-employee form. The draft lives in this view alone and is discarded on
/// navigation away; a valid submission is handed to the injected
/// create-employee sink before navigating back to the list.
#[component]
pub fn AddEmployee() -> Element {
    let sink = use_create_employee();
    let mut draft = use_signal(EmployeeDraft::default);
    let mut error = use_signal(|| None::<String>);
    let nav = navigator();

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let current = draft();
        match current.validate() {
            Ok(()) => {
                sink.create(current);
                nav.push(Route::employees());
            }
            // Required-field gaps keep the user on the form.
            Err(invalid) => error.set(Some(invalid.to_string())),
        }
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    Link { to: Route::employees(), class: "btn btn-link", "< Back" }
                    h1 { class: "page-title", "Add New Employee" }
                }
            }

            form { class: "card form-card", onsubmit: submit,
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                div { class: "form-grid",
                    TextField {
                        label: "Employee ID",
                        placeholder: "AVS001",
                        value: draft.read().id.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.id = e.value()),
                    }
                    TextField {
                        label: "First Name",
                        placeholder: "John",
                        value: draft.read().first_name.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.first_name = e.value()),
                    }
                    TextField {
                        label: "Last Name",
                        placeholder: "Doe",
                        value: draft.read().last_name.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.last_name = e.value()),
                    }
                    TextField {
                        label: "Personal Email",
                        input_type: "email",
                        placeholder: "john.doe@example.com",
                        value: draft.read().personal_email.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.personal_email = e.value()),
                    }
                    TextField {
                        label: "Work Email",
                        input_type: "email",
                        placeholder: "john.doe@example.com",
                        value: draft.read().work_email.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.work_email = e.value()),
                    }
                    TextField {
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "+1 234 567 890",
                        value: draft.read().phone.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.phone = e.value()),
                    }

                    SelectField {
                        label: "Department",
                        prompt: "Select Department",
                        options: DEPARTMENTS.to_vec(),
                        value: draft.read().department.clone(),
                        onchange: move |e: FormEvent| draft.with_mut(|d| d.department = e.value()),
                    }
                    SelectField {
                        label: "Designation",
                        prompt: "Select Designation",
                        options: DESIGNATIONS.to_vec(),
                        value: draft.read().designation.clone(),
                        onchange: move |e: FormEvent| draft.with_mut(|d| d.designation = e.value()),
                    }

                    TextField {
                        label: "DOB",
                        input_type: "date",
                        value: draft.read().dob_date.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.dob_date = e.value()),
                    }
                    TextField {
                        label: "Joining Date",
                        input_type: "date",
                        value: draft.read().joining_date.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.joining_date = e.value()),
                    }
                    TextField {
                        label: "Relieving Date",
                        input_type: "date",
                        required: false,
                        value: draft.read().relieving_date.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.relieving_date = e.value()),
                    }
                    TextField {
                        label: "Notice Period (days)",
                        input_type: "number",
                        required: false,
                        value: draft.read().notice_period.clone(),
                        oninput: move |e: FormEvent| draft.with_mut(|d| d.notice_period = e.value()),
                    }

                    div { class: "form-group form-group-wide",
                        label { class: "form-label", "Address" }
                        textarea {
                            class: "form-input",
                            rows: "3",
                            placeholder: "Enter full address",
                            value: "{draft.read().address}",
                            oninput: move |e| draft.with_mut(|d| d.address = e.value()),
                        }
                    }
                }

                div { class: "form-actions",
                    button { r#type: "submit", class: "btn btn-primary", "Save Employee" }
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
    #[props(default = true)] required: bool,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: input_type,
                placeholder,
                required,
                value: "{value}",
                oninput: move |e| oninput.call(e),
            }
        }
    }
}

#[component]
fn SelectField(
    label: &'static str,
    prompt: &'static str,
    options: Vec<&'static str>,
    value: String,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            select {
                class: "form-input",
                required: true,
                value: "{value}",
                onchange: move |e| onchange.call(e),
                option { value: "", "{prompt}" }
                for choice in options {
                    option { key: "{choice}", value: choice, "{choice}" }
                }
            }
        }
    }
}
