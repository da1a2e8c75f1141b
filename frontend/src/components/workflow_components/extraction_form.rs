use common::document::{ExtractedField, Extraction};
use dioxus::prelude::*;

#[component]
pub fn ExtractionForm(
    extraction: ReadSignal<Extraction>,
    selected_field: ReadSignal<Option<String>>,
    on_field_click: EventHandler<ExtractedField>,
) -> Element {
    let fields = extraction.read().fields.clone();
    rsx! {
        div {
            style: "background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); height: 100%; overflow: auto;",
            div {
                style: "position: sticky; top: 0; background: white; border-bottom: 1px solid #E5E7EB; padding: 12px 16px; z-index: 1;",
                h2 { style: "font-size: 18px; font-weight: 600; color: #1F2937; margin: 0;", "Extracted Data" }
                p { style: "font-size: 14px; color: #6B7280; margin: 4px 0 0 0;", "Click on a field to highlight it in the document" }
                if !extraction.read().schema_used.is_empty() {
                    p { style: "font-size: 12px; color: #9CA3AF; margin: 4px 0 0 0;", "Schema: {extraction.read().schema_used}" }
                }
            }
            div {
                style: "padding: 16px; display: flex; flex-direction: column; gap: 16px;",
                for (index, field) in fields.into_iter().enumerate() {
                    FieldCard {
                        key: "{field.name}-{index}",
                        is_selected: selected_field.read().as_deref() == Some(field.name.as_str()),
                        field,
                        on_click: on_field_click,
                    }
                }
                if extraction.read().fields.is_empty() {
                    div { style: "text-align: center; color: #6B7280; padding: 32px 0;", "No fields extracted" }
                }
            }
        }
    }
}

#[component]
fn FieldCard(field: ReadSignal<ExtractedField>, is_selected: bool, on_click: EventHandler<ExtractedField>) -> Element {
    let level = field.read().confidence_level();
    let border = if is_selected { "2px solid #3B82F6; box-shadow: 0 0 0 3px #BFDBFE" } else { "2px solid #E5E7EB" };
    let field_value = field.read().display_value();
    rsx! {
        div {
            class: "x-field-card",
            style: "padding: 16px; border-radius: 8px; border: {border}; background: {level.background_color()}; cursor: pointer;",
            onclick: move |_| on_click.call(field.read().clone()),
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;",
                label {
                    style: "font-size: 14px; font-weight: 500; color: #4B5563; text-transform: capitalize;",
                    "{field.read().display_name()}"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px; font-size: 12px;",
                    span { style: "color: #9CA3AF;", "Page {field.read().page_number}" }
                    span {
                        style: "padding: 2px 8px; border-radius: 4px; color: {level.text_color()}; background: white;",
                        "{field.read().confidence_percent()}%"
                    }
                }
            }
            div {
                style: "color: #1F2937; font-weight: 500;",
                if field.read().value_is_structured() {
                    pre {
                        style: "font-size: 13px; background: #F9FAFB; padding: 8px; border-radius: 4px; overflow-x: auto; margin: 0;",
                        "{field_value}"
                    }
                } else {
                    "{field_value}"
                }
            }
            if !field.read().source_text.is_empty() {
                div {
                    style: "margin-top: 8px; font-size: 12px; color: #6B7280; font-style: italic;",
                    "Source: \"{field.read().source_text}\""
                }
            }
        }
    }
}
