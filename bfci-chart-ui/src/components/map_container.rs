//! Map container component: Plotly target, loading overlay and legend slot.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Plotly will render into this)
    pub id: String,
    /// Whether the map is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
    /// Legend rendered under the map, usually a `CategoryLegend`
    pub children: Element,
}

/// A container div for the choropleth map with loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let inner_style = format!("width: 100%; height: {}px;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Chargement de la carte..."
                }
            }
            div {
                id: "{props.id}",
                style: "{inner_style}",
            }
            {props.children}
        }
    }
}
