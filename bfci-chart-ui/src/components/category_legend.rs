//! Color legend of the ten climatic categories.

use bfci_index::Category;
use dioxus::prelude::*;

#[component]
pub fn CategoryLegend() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px 16px; margin: 8px 0; font-size: 12px;",
            for category in Category::ALL {
                span {
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {category.color()};",
                    }
                    "{category.label()}"
                }
            }
        }
    }
}
