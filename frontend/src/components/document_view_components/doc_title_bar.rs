//! Title bar above a processed document.

use common::document::DocumentRecord;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_action_icons::MdOpenInNew, md_editor_icons::{MdInsertDriveFile, MdInsertLink}},
};

use crate::routes::Route;

fn format_size(size: i64) -> String {
    let size = size.max(0) as f64;
    if size >= 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else if size >= 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else {
        format!("{size} B")
    }
}

#[component]
pub fn DocTitleBar(document: ReadSignal<DocumentRecord>) -> Element {
    let document_type = use_memo(move || {
        document.read().classification.as_ref().map(|c| c.document_type.clone()).filter(|t| !t.is_empty())
    });
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                height: 54px;
                width: 100%;
                padding: 0 12px;
                background-color: #F8FCFF;
                flex-shrink: 0;
                border-bottom: 1px solid rgba(0, 0, 0, 0.15);
            ",
            Icon { icon: MdInsertDriveFile, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.8); flex-shrink: 0;" }
            div {
                style: "font-size: 18px; font-weight: 500; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{document.read().filename}"
            }
            div {
                style: "font-size: 14px; color: #6B7280; flex-shrink: 0;",
                "{format_size(document.read().size)}"
            }
            if let Some(document_type) = document_type() {
                span {
                    style: "font-size: 13px; padding: 2px 10px; border-radius: 9999px; background: #DBEAFE; color: #1D4ED8; text-transform: capitalize; flex-shrink: 0;",
                    "{document_type}"
                }
            }
            div { style: "flex-grow: 1;" }
            DocActionCopyLink { document_id: document.read().id.clone() }
            DocActionOpenNewTab { document_id: document.read().id.clone() }
        }
    }
}

#[component]
fn DocActionOpenNewTab(document_id: ReadSignal<String>) -> Element {
    rsx! {
        a {
            style: "width: 36px; height: 36px; border: 1px solid #000; border-radius: 8px; background: white; color: black; display: flex; align-items: center; justify-content: center;",
            target: "_blank",
            title: "Open in new tab",
            class: "x-hover-shadow",
            href: Route::view_document(document_id.read().clone()).to_string(),
            Icon { icon: MdOpenInNew, style: "width: 22px; height: 22px;" }
        }
    }
}

#[component]
fn DocActionCopyLink(document_id: ReadSignal<String>) -> Element {
    let mut copied = use_signal(|| false);
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        // the document page url already carries the selected field
        let on_document_page = location.pathname().is_ok_and(|path| path.starts_with("/document/"));
        let url = if on_document_page {
            location.href()
        } else {
            location.origin().map(|origin| format!("{}{}", origin, Route::view_document(document_id.read().clone())))
        };
        let Ok(url) = url else {
            return;
        };
        let _promise = window.navigator().clipboard().write_text(&url);
        dioxus::logger::tracing::info!("Link copied to clipboard: {}", url);
        copied.set(true);
    });
    let label = if copied() { "Link copied" } else { "Copy link" };
    rsx! {
        button {
            style: "height: 36px; padding: 0 10px; border: 1px solid #000; border-radius: 8px; background: white; color: black; display: flex; align-items: center; gap: 6px; cursor: pointer; font-size: 14px;",
            class: "x-hover-shadow",
            onclick: move |_| do_copy_link(()),
            Icon { icon: MdInsertLink, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(-5), "0 B");
    }
}
