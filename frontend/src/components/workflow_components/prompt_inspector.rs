//! Modal listing every agent call made for the document, with its cost.

use common::document::PromptRecord;
use common::prompt_costs::{CostSummary, format_cost, format_token_count, format_tokens, model_display_name};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptTab {
    Prompt,
    Response,
    Schema,
}

/// Agent responses are usually JSON; show them indented when they parse.
fn pretty_response(response: &str) -> String {
    serde_json::from_str::<serde_json::Value>(response)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| response.to_string())
}

#[component]
pub fn PromptInspector(prompts: ReadSignal<Vec<PromptRecord>>, on_close: EventHandler<()>) -> Element {
    let mut selected_prompt_id = use_signal(move || prompts.peek().first().map(|p| p.id.clone()));
    let active_tab = use_signal(|| PromptTab::Prompt);
    let summary = use_memo(move || CostSummary::from_prompts(&prompts.read()));
    let current_prompt = use_memo(move || {
        let id = selected_prompt_id();
        prompts.read().iter().find(|p| Some(&p.id) == id.as_ref()).cloned()
    });

    rsx! {
        div {
            tabindex: "0",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); z-index: 60; display: flex; align-items: center; justify-content: center; padding: 16px; outline: none;",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                style: "background: white; border-radius: 8px; box-shadow: 0 20px 48px rgba(0,0,0,0.3); width: 100%; max-width: 1100px; max-height: 90vh; display: flex; flex-direction: column; overflow: hidden;",

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 16px 24px; background: #1F2937;",
                    h2 { style: "font-size: 20px; font-weight: 600; color: white; margin: 0;", "Prompt Inspector" }
                    button {
                        style: "background: transparent; border: none; color: white; cursor: pointer; padding: 4px;",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                    }
                }

                CostSummaryBar { summary: summary() }

                div {
                    style: "display: flex; flex: 1; overflow: hidden; min-height: 300px;",
                    div {
                        style: "width: 240px; flex-shrink: 0; border-right: 1px solid #E5E7EB; background: #F3F4F6; padding: 16px; overflow-y: auto;",
                        h3 { style: "font-size: 14px; font-weight: 600; color: #374151; margin: 0 0 12px 0;", "Agent Calls" }
                        div {
                            style: "display: flex; flex-direction: column; gap: 8px;",
                            for prompt in prompts.read().clone() {
                                PromptListItem {
                                    key: "{prompt.id}",
                                    is_selected: selected_prompt_id.read().as_deref() == Some(prompt.id.as_str()),
                                    prompt: prompt.clone(),
                                    on_select: move |id: String| selected_prompt_id.set(Some(id)),
                                }
                            }
                        }
                    }
                    div {
                        style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                        if let Some(prompt) = current_prompt() {
                            PromptDetail { prompt, active_tab }
                        } else {
                            div {
                                style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #6B7280;",
                                "No prompts available"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CostSummaryBar(summary: ReadSignal<CostSummary>) -> Element {
    let summary = summary.read().clone();
    rsx! {
        div {
            style: "background: #111827; padding: 12px 24px; border-bottom: 1px solid #374151;",
            div {
                style: "display: flex; align-items: center; gap: 24px;",
                div {
                    span { style: "color: #9CA3AF; font-size: 14px;", "Total Cost: " }
                    span { style: "color: #4ADE80; font-weight: 700; font-size: 18px;", "{format_cost(summary.total_cost)}" }
                }
                div {
                    span { style: "color: #9CA3AF; font-size: 14px;", "Tokens: " }
                    span {
                        style: "color: #60A5FA; font-weight: 500;",
                        "{format_tokens(summary.total_input_tokens)} in / {format_tokens(summary.total_output_tokens)} out"
                    }
                }
            }
            div {
                style: "display: flex; gap: 24px; margin-top: 8px; font-size: 14px;",
                for record in summary.agent_breakdown() {
                    div {
                        key: "{record.id}",
                        style: "display: flex; align-items: center; gap: 8px;",
                        span { style: "color: #C084FC; font-weight: 500;", "{record.agent_type.label()}:" }
                        span {
                            style: "color: #D1D5DB;",
                            "{format_cost(record.total_cost)} "
                            span { style: "color: #6B7280;", "({format_tokens(record.input_tokens)}/{format_tokens(record.output_tokens)})" }
                        }
                        span { style: "color: #6B7280;", "•" }
                        span { style: "color: #9CA3AF; font-size: 12px;", "{model_display_name(&record.model)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PromptListItem(prompt: ReadSignal<PromptRecord>, is_selected: bool, on_select: EventHandler<String>) -> Element {
    let (background, color, muted) = if is_selected { ("#2563EB", "white", "#BFDBFE") } else { ("white", "#1F2937", "#6B7280") };
    let prompt = prompt.read().clone();
    let id = prompt.id.clone();
    rsx! {
        button {
            style: "width: 100%; text-align: left; padding: 8px 12px; border-radius: 8px; border: none; font-size: 14px; cursor: pointer; background: {background}; color: {color};",
            onclick: move |_| on_select.call(id.clone()),
            div {
                style: "display: flex; justify-content: space-between; font-weight: 500;",
                span { "{prompt.agent_type.label()}" }
                span { style: "font-size: 12px; color: {muted};", "{format_cost(prompt.total_cost)}" }
            }
            div { style: "font-size: 12px; margin-top: 4px; color: {muted};", "{model_display_name(&prompt.model)}" }
            div {
                style: "font-size: 12px; color: {muted};",
                "{format_tokens(prompt.input_tokens)} in / {format_tokens(prompt.output_tokens)} out"
            }
        }
    }
}

#[component]
fn PromptDetail(prompt: ReadSignal<PromptRecord>, mut active_tab: Signal<PromptTab>) -> Element {
    let has_schema = use_memo(move || prompt.read().schema.as_deref().is_some_and(|s| !s.is_empty()));
    use_effect(move || {
        if active_tab() == PromptTab::Schema && !has_schema() {
            active_tab.set(PromptTab::Prompt);
        }
    });
    let content = use_memo(move || {
        let prompt = prompt.read();
        match active_tab() {
            PromptTab::Prompt => prompt.prompt.clone(),
            PromptTab::Response => pretty_response(&prompt.response),
            PromptTab::Schema => prompt.schema.clone().unwrap_or_default(),
        }
    });
    let record = prompt.read().clone();

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 8px 16px; background: #F9FAFB; border-bottom: 1px solid #E5E7EB;",
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                span { style: "font-size: 14px; font-weight: 500; color: #374151;", "{record.agent_type.label()}" }
                span { style: "font-size: 12px; color: #6B7280; background: #E5E7EB; padding: 2px 8px; border-radius: 4px;", "{model_display_name(&record.model)}" }
            }
            div {
                style: "display: flex; align-items: center; gap: 16px; font-size: 14px; color: #4B5563;",
                span { span { style: "font-weight: 500; color: #2563EB;", "{format_token_count(record.input_tokens)}" } " input" }
                span { span { style: "font-weight: 500; color: #9333EA;", "{format_token_count(record.output_tokens)}" } " output" }
                span { style: "font-weight: 500; color: #16A34A;", "{format_cost(record.total_cost)}" }
            }
        }
        div {
            style: "display: flex; padding: 0 16px; background: #F9FAFB; border-bottom: 1px solid #E5E7EB;",
            TabButton { label: "Prompt", tab: PromptTab::Prompt, active_tab }
            TabButton { label: "Response", tab: PromptTab::Response, active_tab }
            if has_schema() {
                TabButton { label: "Schema", tab: PromptTab::Schema, active_tab }
            }
        }
        div {
            style: "flex: 1; overflow: auto; padding: 16px; background: white;",
            pre {
                style: "font-size: 13px; background: #111827; color: #F3F4F6; padding: 16px; border-radius: 8px; white-space: pre-wrap; font-family: monospace; line-height: 1.6; margin: 0;",
                "{content}"
            }
        }
    }
}

#[component]
fn TabButton(label: String, tab: PromptTab, mut active_tab: Signal<PromptTab>) -> Element {
    let is_active = active_tab() == tab;
    let (border, color, background) = if is_active { ("#2563EB", "#1D4ED8", "white") } else { ("transparent", "#374151", "transparent") };
    rsx! {
        button {
            style: "padding: 12px 16px; font-size: 14px; font-weight: 500; border: none; border-bottom: 2px solid {border}; color: {color}; background: {background}; cursor: pointer;",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
