//! Dropdown selector for choosing an index family.

use crate::state::AppState;
use bfci_index::IndexFamily;
use dioxus::prelude::*;

/// Index family dropdown selector.
/// Shows the five family labels and updates selected_family on change.
#[component]
pub fn IndexSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_family)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<IndexFamily>() {
        Ok(family) => state.selected_family.set(family),
        Err(e) => log::warn!("[BFCI Debug] index selector: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "index-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choisir un indice : "
            }
            select {
                id: "index-select",
                onchange: on_change,
                for family in IndexFamily::ALL {
                    option {
                        value: "{family.sheet_name()}",
                        selected: family == selected,
                        "{family.label()}"
                    }
                }
            }
        }
    }
}
