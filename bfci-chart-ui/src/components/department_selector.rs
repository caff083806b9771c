//! Dropdown selector for focusing on one department.

use crate::state::AppState;
use bfci_index::department::selector_options;
use dioxus::prelude::*;

/// Department dropdown: `Tous` followed by every department of the sheet.
#[component]
pub fn DepartmentSelector() -> Element {
    let mut state = use_context::<AppState>();
    let departments = state.departments.read().clone();
    let options = selector_options(&departments);
    let selected = (state.selected_department)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_department.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "department-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choisir un département : "
            }
            select {
                id: "department-select",
                onchange: on_change,
                for department in options.iter() {
                    option {
                        value: "{department}",
                        selected: *department == selected,
                        "{department}"
                    }
                }
            }
        }
    }
}
