use dioxus::logger::tracing;
use dioxus::prelude::*;

pub const DEFAULT_LEFT_PERCENT: f64 = 55.0;
pub const MIN_LEFT_PERCENT: f64 = 30.0;
pub const MAX_LEFT_PERCENT: f64 = 70.0;

fn left_percent_at(pointer_x: f64, container_left: f64, container_width: f64) -> Option<f64> {
    if container_width <= 0.0 {
        return None;
    }
    let percent = (pointer_x - container_left) / container_width * 100.0;
    Some(percent.clamp(MIN_LEFT_PERCENT, MAX_LEFT_PERCENT))
}

/// Two panes split by a draggable divider.
#[component]
pub fn ResizablePanes(left: Element, right: Element) -> Element {
    let mut left_percent = use_signal(|| DEFAULT_LEFT_PERCENT);
    let mut dragging = use_signal(|| false);
    let mut container = use_signal(|| None::<Event<MountedData>>);
    // (left, width) of the container, measured when a drag starts
    let mut container_box = use_signal(|| (0.0_f64, 0.0_f64));

    let divider_color = use_memo(move || if dragging() { "#3B82F6" } else { "#E5E7EB" });

    rsx! {
        div {
            style: "position: relative; display: flex; flex-direction: row; width: 100%; height: 100%;",
            onmounted: move |e| container.set(Some(e)),
            onmousemove: move |e| {
                if !dragging() {
                    return;
                }
                let (container_left, container_width) = container_box();
                if let Some(percent) = left_percent_at(e.client_coordinates().x, container_left, container_width) {
                    left_percent.set(percent);
                }
            },
            onmouseup: move |_| dragging.set(false),
            onmouseleave: move |_| dragging.set(false),

            div {
                style: "height: 100%; overflow: hidden; width: {left_percent}%; flex-shrink: 0;",
                {left}
            }
            div {
                class: "x-pane-divider",
                style: "width: 8px; height: 100%; flex-shrink: 0; cursor: col-resize; background: {divider_color}; display: flex; align-items: center; justify-content: center;",
                onmousedown: move |e| {
                    e.prevent_default();
                    dragging.set(true);
                    let Some(mounted) = container.read().clone() else {
                        return;
                    };
                    spawn(async move {
                        match mounted.get_client_rect().await {
                            Ok(rect) => container_box.set((rect.origin.x, rect.size.width)),
                            Err(e) => tracing::error!("Failed to measure panes: {:?}", e),
                        }
                    });
                },
                div { style: "width: 2px; height: 32px; border-radius: 9999px; background: #9CA3AF;" }
            }
            div {
                style: "height: 100%; overflow: hidden; flex: 1;",
                {right}
            }
            // iframes swallow mouse events, so cover them while dragging
            if dragging() {
                div {
                    style: "position: absolute; inset: 0; cursor: col-resize; user-select: none;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_stays_in_range() {
        assert_eq!(left_percent_at(100.0, 0.0, 1000.0), Some(MIN_LEFT_PERCENT));
        assert_eq!(left_percent_at(500.0, 0.0, 1000.0), Some(50.0));
        assert_eq!(left_percent_at(900.0, 0.0, 1000.0), Some(MAX_LEFT_PERCENT));
        assert_eq!(left_percent_at(350.0, 100.0, 500.0), Some(50.0));
        assert_eq!(left_percent_at(-40.0, 0.0, 1000.0), Some(MIN_LEFT_PERCENT));
    }

    #[test]
    fn unmeasured_container_is_ignored() {
        assert_eq!(left_percent_at(300.0, 0.0, 0.0), None);
        assert_eq!(left_percent_at(300.0, 0.0, -10.0), None);
    }
}
