//! Climate information for the selected department.

use bfci_data::join::format_value;
use bfci_data::DepartmentDetail;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DepartmentDetailPanelProps {
    pub department: String,
    pub detail: DepartmentDetail,
}

/// Value and category of one department, or the no-data message.
#[component]
pub fn DepartmentDetailPanel(props: DepartmentDetailPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h4 {
                style: "margin: 0 0 6px 0;",
                "Informations climatiques pour : {props.department}"
            }
            {
                match &props.detail {
                    DepartmentDetail::Found(observation) => rsx! {
                        ul {
                            style: "margin: 0; padding-left: 20px;",
                            li {
                                strong { "Valeur" }
                                " : "
                                code { "{format_value(observation.value)}" }
                            }
                            li {
                                strong { "Catégorie" }
                                " : "
                                code { "{observation.category}" }
                            }
                        }
                    },
                    DepartmentDetail::NoData { .. } => rsx! {
                        p {
                            style: "margin: 0; color: #666;",
                            "{props.detail.message()}"
                        }
                    },
                }
            }
        }
    }
}
