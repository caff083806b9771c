//! Pre-rendered animation of the selected index family.

use super::WarningDisplay;
use bfci_data::animation::AnimationLookup;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AnimationPanelProps {
    /// Display label of the family (e.g., "Indice WRSI")
    pub label: String,
    pub lookup: AnimationLookup,
}

/// Shows the family's GIF, or a warning when it was not bundled.
#[component]
pub fn AnimationPanel(props: AnimationPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h4 {
                style: "margin: 0 0 6px 0;",
                "Évolution annuelle : {props.label}"
            }
            {
                match &props.lookup {
                    AnimationLookup::Found { path } => rsx! {
                        img {
                            src: "{path}",
                            alt: "{props.label}",
                            style: "max-width: 100%;",
                        }
                    },
                    AnimationLookup::Missing { .. } => rsx! {
                        WarningDisplay { message: props.lookup.warning().unwrap_or_default() }
                    },
                }
            }
        }
    }
}
