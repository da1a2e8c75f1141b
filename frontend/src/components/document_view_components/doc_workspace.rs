use common::document::DocumentRecord;
use dioxus::prelude::*;

use crate::components::document_view_components::doc_title_bar::DocTitleBar;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::workflow_components::resizable_panes::ResizablePanes;

/// Title bar over the document (left) and its results (right).
#[component]
pub fn DocumentWorkspace(document: ReadSignal<DocumentRecord>, left: Element, right: Element) -> Element {
    rsx! {
        div {
            class: "x-fade-in",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                width: 100%;
                overflow: hidden;
            ",
            DocTitleBar { document }
            div {
                style: "width: 100%; height: calc(100% - 54px); padding: 16px;",
                ResizablePanes {
                    left: rsx! {
                        div {
                            style: "height: 100%; background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); overflow: hidden;",
                            SuspendWrapper { {left} }
                        }
                    },
                    right: rsx! {
                        div {
                            style: "height: 100%; padding-left: 8px;",
                            SuspendWrapper { {right} }
                        }
                    },
                }
            }
        }
    }
}
