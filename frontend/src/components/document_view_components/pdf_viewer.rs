//! Rendered PDF pages with the selected field's source text highlighted.

use std::collections::BTreeMap;

use common::pdf_to_html_conversion::{
    DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT, RenderedPdfDocument, clamp_page, zoom_in, zoom_out,
};
use common::text_highlight::{HighlightQuery, HighlightResult, resolve_optional};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdZoomIn, MdZoomOut},
        md_file_icons::MdFileDownload,
        md_navigation_icons::{MdChevronLeft, MdChevronRight},
    },
};

use crate::api::document_api::{download_document_url, get_rendered_pdf};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::timers::sleep_ms;

/// Page layout inside the iframe finishes some time after the srcdoc changes.
const PAGE_SETTLE_DELAY_MS: u32 = 150;
const PAGE_GAP_PX: f32 = 16.0;
const VIEWER_PADDING_PX: f32 = 16.0;

type PageMounts = Signal<BTreeMap<u32, Event<MountedData>>>;

#[component]
pub fn PdfViewer(document_id: ReadSignal<String>, highlight: ReadSignal<Option<HighlightQuery>>) -> Element {
    let rendered_pdf = use_resource(move || {
        let document_id = document_id.read().clone();
        async move { get_rendered_pdf(document_id).await }
    });
    match rendered_pdf.read().clone() {
        Some(Ok(rendered_pdf)) => {
            rsx! {
                PdfPagesView { rendered_pdf, document_id, highlight }
            }
        }
        Some(Err(e)) => {
            rsx! {
                ComponentErrorDisplay { error_txt: format!("{e}") }
            }
        }
        None => {
            rsx! {
                LoadingIndicator { label: "Rendering document" }
            }
        }
    }
}

async fn scroll_to_page(mounts: PageMounts, page_number: u32) {
    let mount = mounts.peek().get(&page_number).cloned();
    let Some(mount) = mount else {
        tracing::info!("No page mounted to scroll to: {page_number}");
        return;
    };
    let scrolled = mount
        .scroll_to_with_options(ScrollToOptions {
            behavior: ScrollBehavior::Smooth,
            vertical: ScrollLogicalPosition::Start,
            horizontal: ScrollLogicalPosition::Nearest,
        })
        .await;
    if let Err(e) = scrolled {
        tracing::error!("Failed to scroll to page {page_number}: {e:?}");
    }
}

#[component]
fn PdfPagesView(
    rendered_pdf: ReadSignal<RenderedPdfDocument>,
    document_id: ReadSignal<String>,
    highlight: ReadSignal<Option<HighlightQuery>>,
) -> Element {
    let mounts: PageMounts = use_signal(BTreeMap::new);
    let mut current_page = use_signal(|| 1_u32);
    let mut zoom_percent = use_signal(|| DEFAULT_ZOOM_PERCENT);
    let mut viewer_width = use_signal(|| 0.0_f32);

    let page_count = use_memo(move || rendered_pdf.read().page_count());
    let page_width_px = use_memo(move || rendered_pdf.read().page_width_px);
    let page_height_px = use_memo(move || rendered_pdf.read().page_height_px);

    let highlight_result = use_memo(move || {
        let query = highlight.read().clone();
        let rendered_pdf = rendered_pdf.read();
        let runs = query
            .as_ref()
            .and_then(|query| rendered_pdf.page(query.page_number))
            .map(|page| page.text_runs.as_slice())
            .unwrap_or_default();
        resolve_optional(query.as_ref(), runs)
    });

    // page 100% = page fits the pane width
    let scale = use_memo(move || {
        let fit = if viewer_width() > 0.0 && page_width_px() > 0.0 {
            (viewer_width() - 2.0 * VIEWER_PADDING_PX).max(1.0) / page_width_px()
        } else {
            1.0
        };
        fit * zoom_percent() as f32 / 100.0
    });

    use_effect(move || {
        let Some(query) = highlight.read().clone() else {
            return;
        };
        let result = highlight_result();
        tracing::info!(
            "Highlight on page {}: {} runs ({:?})",
            query.page_number,
            result.matched_run_indices.len(),
            result.tier
        );
        let page_number = clamp_page(query.page_number, *page_count.peek());
        current_page.set(page_number);
        spawn(async move {
            sleep_ms(PAGE_SETTLE_DELAY_MS).await;
            scroll_to_page(mounts, page_number).await;
        });
    });

    let mut go_to_page = move |page_number: u32| {
        let page_number = clamp_page(page_number, page_count());
        current_page.set(page_number);
        spawn(async move {
            scroll_to_page(mounts, page_number).await;
        });
    };

    let pages = rendered_pdf.read().pages.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; background: #F3F4F6;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; background: white; border-bottom: 1px solid #E5E7EB; padding: 8px 16px; flex-shrink: 0;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    ToolbarButton {
                        disabled: current_page() <= 1,
                        onclick: move |_| go_to_page(current_page().saturating_sub(1)),
                        Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px;" }
                    }
                    span { style: "font-size: 14px; font-weight: 500; color: #374151;", "Page {current_page} of {page_count}" }
                    ToolbarButton {
                        disabled: current_page() >= page_count(),
                        onclick: move |_| go_to_page(current_page() + 1),
                        Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" }
                    }
                }
                HighlightBadge { highlight, highlight_result }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    ToolbarButton {
                        disabled: zoom_percent() <= MIN_ZOOM_PERCENT,
                        onclick: move |_| zoom_percent.set(zoom_out(zoom_percent())),
                        Icon { icon: MdZoomOut, style: "width: 20px; height: 20px;" }
                    }
                    span { style: "font-size: 14px; width: 48px; text-align: center; font-weight: 500; color: #374151;", "{zoom_percent}%" }
                    ToolbarButton {
                        disabled: zoom_percent() >= MAX_ZOOM_PERCENT,
                        onclick: move |_| zoom_percent.set(zoom_in(zoom_percent())),
                        Icon { icon: MdZoomIn, style: "width: 20px; height: 20px;" }
                    }
                    a {
                        href: download_document_url(&document_id.read()),
                        title: "Download PDF",
                        style: "display: flex; align-items: center; padding: 6px; border-radius: 6px; color: #374151;",
                        class: "x-hover-shadow",
                        Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
                    }
                }
            }
            div {
                style: "flex: 1; overflow: auto; padding: {VIEWER_PADDING_PX}px; display: flex; flex-direction: column; align-items: center; gap: {PAGE_GAP_PX}px;",
                onresize: move |e| {
                    let Ok(size) = e.data().get_border_box_size() else {
                        tracing::error!("Failed to get border box size: {:#?}", e.data());
                        return;
                    };
                    viewer_width.set(size.width as f32);
                },
                for page in pages {
                    PdfPageFrame {
                        key: "{page.page_number}",
                        page_number: page.page_number,
                        rendered_pdf,
                        highlight,
                        highlight_result,
                        scale,
                        page_width_px,
                        page_height_px,
                        mounts,
                    }
                }
            }
        }
    }
}

#[component]
fn PdfPageFrame(
    page_number: u32,
    rendered_pdf: ReadSignal<RenderedPdfDocument>,
    highlight: ReadSignal<Option<HighlightQuery>>,
    highlight_result: ReadSignal<HighlightResult>,
    scale: ReadSignal<f32>,
    page_width_px: ReadSignal<f32>,
    page_height_px: ReadSignal<f32>,
    mut mounts: PageMounts,
) -> Element {
    // only the queried page carries a highlight rule
    let srcdoc = use_memo(move || {
        let rendered_pdf = rendered_pdf.read();
        let Some(page) = rendered_pdf.page(page_number) else {
            return String::new();
        };
        let on_this_page = highlight.read().as_ref().is_some_and(|query| query.page_number == page_number);
        if on_this_page {
            rendered_pdf.page_srcdoc(page, &highlight_result.read())
        } else {
            rendered_pdf.page_srcdoc(page, &HighlightResult::default())
        }
    });

    rsx! {
        div {
            style: "
                flex-shrink: 0;
                width: {page_width_px() * scale()}px;
                height: {page_height_px() * scale()}px;
                background: white;
                box-shadow: 0 2px 8px rgba(0,0,0,0.15);
                overflow: hidden;
            ",
            onmounted: move |e| {
                mounts.write().insert(page_number, e);
            },
            iframe {
                title: "Page {page_number}",
                srcdoc: "{srcdoc}",
                style: "
                    border: none;
                    width: {page_width_px}px;
                    height: {page_height_px}px;
                    transform: scale({scale});
                    transform-origin: top left;
                ",
            }
        }
    }
}

#[component]
fn HighlightBadge(highlight: ReadSignal<Option<HighlightQuery>>, highlight_result: ReadSignal<HighlightResult>) -> Element {
    let Some(query) = highlight.read().clone() else {
        return rsx! {};
    };
    let result = highlight_result.read().clone();
    let (text, color, background) = if result.is_empty() {
        (format!("Source text not found on page {}", query.page_number), "#B91C1C", "#FEE2E2")
    } else if result.is_approximate() {
        ("Approximate match".to_string(), "#A16207", "#FEF9C3")
    } else {
        ("Exact match".to_string(), "#15803D", "#DCFCE7")
    };
    rsx! {
        span {
            style: "font-size: 12px; padding: 2px 8px; border-radius: 9999px; color: {color}; background: {background}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
            "{text}"
        }
    }
}

#[component]
fn ToolbarButton(disabled: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let (color, cursor) = if disabled { ("rgba(0,0,0,0.3)", "not-allowed") } else { ("#374151", "pointer") };
    rsx! {
        button {
            disabled,
            style: "display: flex; align-items: center; justify-content: center; padding: 4px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; color: {color}; cursor: {cursor};",
            class: "x-hover-shadow",
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
