use common::document::Classification;
use dioxus::prelude::*;

#[component]
pub fn ClassificationView(
    classification: ReadSignal<Classification>,
    loading: ReadSignal<bool>,
    on_accept: EventHandler<()>,
    on_reject: EventHandler<()>,
) -> Element {
    let confidence_percent = use_memo(move || classification.read().confidence_percent());
    let confidence_level = use_memo(move || classification.read().confidence_level());
    let accept_label = use_memo(move || if loading() { "Processing..." } else { "Accept & Extract Data" });

    rsx! {
        div {
            style: "
                background: white;
                border-radius: 8px;
                box-shadow: 0 4px 12px rgba(0,0,0,0.08);
                padding: 24px;
                height: 100%;
                overflow: auto;
                display: flex;
                flex-direction: column;
                gap: 24px;
            ",
            h2 {
                style: "font-size: 24px; font-weight: 700; color: #1F2937; margin: 0;",
                "Document Classification"
            }

            div {
                style: "background: #F9FAFB; border-radius: 8px; padding: 16px;",
                div {
                    style: "font-size: 13px; color: #6B7280; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 4px;",
                    "Document Type"
                }
                div {
                    style: "font-size: 30px; font-weight: 700; color: #1F2937; text-transform: capitalize;",
                    "{classification.read().document_type}"
                }
                if !classification.read().subtypes.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                        for subtype in classification.read().subtypes.clone() {
                            span {
                                key: "{subtype}",
                                style: "padding: 4px 8px; background: #DBEAFE; color: #1D4ED8; font-size: 14px; border-radius: 4px;",
                                "{subtype}"
                            }
                        }
                    }
                }
            }

            div {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    span { style: "font-size: 14px; color: #6B7280;", "Confidence" }
                    span {
                        style: "font-weight: 700; color: {confidence_level().text_color()};",
                        "{confidence_percent}%"
                    }
                }
                div {
                    style: "width: 100%; height: 8px; background: #E5E7EB; border-radius: 9999px;",
                    div {
                        style: "height: 8px; border-radius: 9999px; width: {confidence_percent}%; background: {confidence_level().text_color()};",
                    }
                }
            }

            if let Some(language) = classification.read().language.clone() {
                div {
                    div { style: "font-size: 14px; color: #6B7280;", "Language" }
                    div { style: "font-weight: 500; color: #1F2937; text-transform: uppercase;", "{language}" }
                }
            }

            div {
                div { style: "font-size: 14px; color: #6B7280; margin-bottom: 8px;", "Reasoning" }
                div {
                    style: "background: #F9FAFB; border-radius: 8px; padding: 16px; color: #374151; line-height: 1.6;",
                    "{classification.read().reasoning}"
                }
            }

            div {
                style: "display: flex; gap: 16px; padding-top: 16px; border-top: 1px solid #E5E7EB;",
                button {
                    disabled: loading(),
                    style: "flex: 1; background: #2563EB; color: white; padding: 12px 24px; border: none; border-radius: 8px; font-size: 15px; font-weight: 500; cursor: pointer;",
                    onclick: move |_| on_accept.call(()),
                    "{accept_label}"
                }
                button {
                    disabled: loading(),
                    style: "padding: 12px 24px; background: white; border: 1px solid #D1D5DB; border-radius: 8px; font-size: 15px; font-weight: 500; color: #374151; cursor: pointer;",
                    onclick: move |_| on_reject.call(()),
                    "Upload Different File"
                }
            }
        }
    }
}
