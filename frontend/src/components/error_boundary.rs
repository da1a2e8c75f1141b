//! Error boundaries for render failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:#?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "padding: 24px; display: flex; flex-direction: column; gap: 12px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 40px; margin: 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px; margin: 0;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: Route::ProcessorPage {}.to_string(),
                            style: "color: #2563EB; font-size: 18px; width: fit-content;",
                            "Back to Document Processor"
                        }
                        pre {
                            style: "color: black; border: 1px solid #FCA5A5; background: #FEF2F2; padding: 10px; border-radius: 6px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #2563EB; font-size: 16px; border: 1px solid #2563EB; background: white; padding: 8px 16px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline error box, also used for failed server calls.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",

            div {
                style: "color: #B91C1C; font-size: 24px; font-weight: 600;",
                "Could not load this view",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #FCA5A5; background: #FEF2F2; padding: 10px; border-radius: 6px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
