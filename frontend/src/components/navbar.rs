//! Top header bar, laid out around every page.

use common::workflow::{ProcessingStage, WorkflowStep};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDescription};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::workflow_components::processing_status::ProcessingStatus;
use crate::components::workflow_components::prompt_inspector::PromptInspector;
use crate::components::workflow_components::workflow_control::WorkflowControl;
use crate::routes::Route;

/// Shared layout; owns the workflow state for all pages.
#[component]
pub fn Navbar() -> Element {
    let control = use_context_provider(WorkflowControl::new);
    let stage = use_memo(move || control.state.read().stage);
    // the latest agent call tells which model is working
    let model = use_memo(move || control.state.read().prompts.last().map(|p| p.model.clone()).unwrap_or_default());
    let prompts = use_memo(move || control.state.read().prompts.clone());
    let mut show_prompts = control.show_prompts;

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            NavbarHeader {}
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px; overflow: hidden;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
        if stage() != ProcessingStage::Idle {
            ProcessingStatus { stage, model }
        }
        if show_prompts() {
            PromptInspector {
                prompts,
                on_close: move |_| show_prompts.set(false),
            }
        }
    }
}

#[component]
fn NavbarHeader() -> Element {
    let control = use_context::<WorkflowControl>();
    let step = use_memo(move || control.state.read().step);
    let prompt_count = use_memo(move || control.state.read().prompts.len());
    let mut show_prompts = control.show_prompts;

    rsx! {
        div {
            id: "x-nav-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                height: 64px;
                padding: 0 24px;
                background-color: white;
                box-shadow: 0 1px 3px rgba(0,0,0,0.1);
                flex-shrink: 0;
                z-index: 10;
            ",
            Link {
                to: Route::ProcessorPage {},
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    Icon { icon: MdDescription, style: "width: 28px; height: 28px; color: #2563EB;" }
                    span { style: "color: #D1D5DB;", "|" }
                    h1 { style: "font-size: 18px; font-weight: 500; color: #4B5563; margin: 0;", "Document Processor" }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                if step() != WorkflowStep::Upload {
                    button {
                        style: "padding: 8px 16px; font-size: 14px; background: #2563EB; color: white; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                        onclick: move |_| {
                            control.start_over();
                            navigator().push(Route::ProcessorPage {});
                        },
                        "+ New Document"
                    }
                }
                if prompt_count() > 0 {
                    button {
                        style: "padding: 8px 16px; font-size: 14px; background: #374151; color: white; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                        onclick: move |_| show_prompts.set(true),
                        "View Prompts ({prompt_count})"
                    }
                }
            }
        }
    }
}
