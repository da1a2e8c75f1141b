//! Floating indicator shown while an agent call is running.

use common::prompt_costs::model_display_name;
use common::workflow::ProcessingStage;
use dioxus::prelude::*;

use crate::timers::sleep_ms;

const TICK_MS: u32 = 400;

/// Mount only while `stage` is not idle; the ticker stops when the component unmounts.
#[component]
pub fn ProcessingStatus(stage: ReadSignal<ProcessingStage>, model: ReadSignal<String>) -> Element {
    let mut ticks = use_signal(|| 0_u32);
    use_effect(move || {
        let _stage = stage();
        ticks.set(0);
    });
    use_future(move || async move {
        loop {
            sleep_ms(TICK_MS).await;
            *ticks.write() += 1;
        }
    });

    let dots = use_memo(move || ".".repeat((ticks() % 4) as usize));
    let elapsed_seconds = use_memo(move || ticks() * TICK_MS / 1000);
    let model_name = use_memo(move || model_display_name(&model.read()));

    rsx! {
        div {
            class: "x-fade-in",
            style: "position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); z-index: 50;",
            div {
                style: "
                    background: #111827;
                    border: 1px solid #374151;
                    border-radius: 12px;
                    box-shadow: 0 12px 32px rgba(0,0,0,0.35);
                    padding: 16px 24px;
                    display: flex;
                    align-items: center;
                    gap: 16px;
                ",
                div { class: "x-spinner" }
                div {
                    style: "display: flex; flex-direction: column; gap: 4px;",
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        span { style: "font-weight: 600; color: {stage().color()};", "{stage().label()}" }
                        span { style: "color: #6B7280; width: 24px;", "{dots}" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 12px; font-size: 14px; color: #9CA3AF;",
                        span {
                            "Model: "
                            span { style: "color: #E5E7EB; font-weight: 500;", "{model_name}" }
                        }
                        span { style: "color: #4B5563;", "•" }
                        span { "{elapsed_seconds}s" }
                    }
                }
            }
        }
    }
}
