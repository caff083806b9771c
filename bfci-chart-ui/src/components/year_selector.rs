//! Dropdown selector for the year column.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year dropdown, populated from the selected sheet's year columns.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_year.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choisir une année : "
            }
            select {
                id: "year-select",
                disabled: years.is_empty(),
                onchange: on_change,
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
