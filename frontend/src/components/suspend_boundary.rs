use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator { label: "Loading" }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(into)] label: String) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
                gap: 12px;
                align-items: center;
                justify-content: center;
                color: #4B5563;
                font-size: 16px;
            ",
            div { class: "x-spinner" }
            "{label}..."
        }
    }
}
