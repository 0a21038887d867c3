use dioxus::prelude::*;
use types::employee::{EmployeeStatus, sample_roster};
use types::roster::{self, ListState};

use crate::Route;

/// Employee roster: searchable, paginated, with an in-place status toggle.
/// The records are seeded at mount and live only as long as this view.
#[component]
pub fn Employees() -> Element {
    let mut employees = use_signal(sample_roster);
    let mut list = use_signal(ListState::default);

    let page = use_memo(move || {
        let state = list.read();
        roster::page(&employees.read(), &state.search_term, state.current_page)
    });

    let view = page();
    let total_pages = view.total_pages;
    let current_page = list.read().current_page;
    let search_term = list.read().search_term.clone();
    let first_row = view.first_index + 1;
    let last_row = (view.first_index + view.rows.len()).min(view.filtered);
    let filtered = view.filtered;

    let mut goto = move |target: usize| {
        list.with_mut(|state| state.goto(target, total_pages));
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Employee Management" }
                }
                div { class: "page-header-actions",
                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Search employees...",
                        value: "{search_term}",
                        oninput: move |e| {
                            // New search always lands on page 1.
                            list.with_mut(|state| state.set_search(e.value()));
                        },
                    }
                    Link {
                        to: Route::AddEmployee {},
                        class: "btn btn-primary",
                        "+ Add Employee"
                    }
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "S.No" }
                                th { "Employee Name" }
                                th { "Designation" }
                                th { "Emp ID" }
                                th { "Phone" }
                                th { "Email" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if view.rows.is_empty() {
                                tr {
                                    td { colspan: "8", class: "empty-row", "No employees found" }
                                }
                            }
                            for (offset, employee) in view.rows.iter().enumerate() {
                                {
                                    let employee_id = employee.id;
                                    let status = employee.status;
                                    let serial = view.first_index + offset + 1;
                                    let status_class = match status {
                                        EmployeeStatus::Active => "status-pill status-active",
                                        EmployeeStatus::Inactive => "status-pill status-inactive",
                                    };
                                    rsx! {
                                        tr { key: "{employee_id}",
                                            td { "{serial}" }
                                            td { class: "cell-name", "{employee.name}" }
                                            td { "{employee.designation}" }
                                            td { "{employee.emp_id}" }
                                            td { "{employee.phone}" }
                                            td { "{employee.email}" }
                                            td {
                                                span {
                                                    class: status_class,
                                                    onclick: move |_| {
                                                        employees.with_mut(|records| {
                                                            roster::toggle_status(records, employee_id);
                                                        });
                                                    },
                                                    "{status}"
                                                }
                                            }
                                            td {
                                                Link {
                                                    to: Route::unimplemented(&format!("employees/edit/{employee_id}")),
                                                    class: "btn btn-link",
                                                    "Edit"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if view.filtered > 0 {
                    div { class: "pagination-bar",
                        p { class: "pagination-summary",
                            "Showing {first_row} to {last_row} of {filtered} employees"
                        }
                        nav { class: "pagination-controls",
                            button {
                                class: "btn btn-page",
                                disabled: current_page == 1,
                                onclick: move |_| goto(1),
                                "First"
                            }
                            button {
                                class: "btn btn-page",
                                disabled: current_page == 1,
                                onclick: move |_| goto(current_page.saturating_sub(1)),
                                "Prev"
                            }
                            for number in roster::page_numbers(current_page, total_pages) {
                                button {
                                    key: "{number}",
                                    class: if number == current_page { "btn btn-page current" } else { "btn btn-page" },
                                    onclick: move |_| goto(number),
                                    "{number}"
                                }
                            }
                            button {
                                class: "btn btn-page",
                                disabled: current_page == total_pages,
                                onclick: move |_| goto(current_page + 1),
                                "Next"
                            }
                            button {
                                class: "btn btn-page",
                                disabled: current_page == total_pages,
                                onclick: move |_| goto(total_pages),
                                "Last"
                            }
                        }
                    }
                }
            }
        }
    }
}
