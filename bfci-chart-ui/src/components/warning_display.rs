//! Non-fatal warning box.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WarningDisplayProps {
    pub message: String,
}

#[component]
pub fn WarningDisplay(props: WarningDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
            "{props.message}"
        }
    }
}
