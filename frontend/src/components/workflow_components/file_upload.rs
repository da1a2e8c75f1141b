use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus::html::HasFileData;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdCloudUpload};

fn looks_like_pdf(filename: &str, content_type: Option<&str>) -> bool {
    content_type == Some("application/pdf") || filename.to_lowercase().ends_with(".pdf")
}

/// Drop zone and file picker; hands the chosen PDF's name and bytes to `on_upload`.
#[component]
pub fn FileUpload(disabled: ReadSignal<bool>, on_upload: EventHandler<(String, Vec<u8>)>) -> Element {
    let mut drag_active = use_signal(|| false);
    let mut local_error = use_signal(|| None::<String>);

    let mut read_first_file = move |files: Vec<dioxus::html::FileData>| {
        if *disabled.peek() {
            return;
        }
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let filename = file.name();
        if !looks_like_pdf(&filename, file.content_type().as_deref()) {
            local_error.set(Some(format!("{filename} is not a PDF file")));
            return;
        }
        local_error.set(None);
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    tracing::info!("Read {} ({} bytes)", filename, bytes.len());
                    on_upload.call((filename, bytes.to_vec()));
                }
                Err(e) => {
                    tracing::error!("Failed to read {}: {:?}", filename, e);
                    local_error.set(Some(format!("Could not read {filename}")));
                }
            }
        });
    };

    let border_color = use_memo(move || if drag_active() { "#3B82F6" } else { "#D1D5DB" });
    let background = use_memo(move || if drag_active() { "#EFF6FF" } else { "white" });
    let cursor = use_memo(move || if disabled() { "not-allowed" } else { "pointer" });

    rsx! {
        div {
            style: "
                position: relative;
                border: 2px dashed {border_color};
                background: {background};
                border-radius: 12px;
                padding: 48px;
                text-align: center;
            ",
            ondragover: move |e| {
                e.prevent_default();
                drag_active.set(true);
            },
            ondragleave: move |_| drag_active.set(false),
            ondrop: move |e| {
                e.prevent_default();
                drag_active.set(false);
                read_first_file(e.files());
            },
            input {
                r#type: "file",
                accept: "application/pdf",
                disabled: disabled(),
                style: "position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0; cursor: {cursor};",
                onchange: move |e| read_first_file(e.files()),
            }
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 12px;",
                Icon { icon: MdCloudUpload, style: "width: 64px; height: 64px; color: #6B7280;" }
                div {
                    style: "font-size: 18px; font-weight: 500; color: #374151;",
                    "Drop your PDF here or click to browse"
                }
                div {
                    style: "font-size: 14px; color: #6B7280;",
                    "Supports PDF files up to 50MB"
                }
                if let Some(error) = local_error() {
                    div {
                        style: "font-size: 14px; color: #B91C1C;",
                        "{error}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_detection() {
        assert!(looks_like_pdf("Scan.PDF", None));
        assert!(looks_like_pdf("upload", Some("application/pdf")));
        assert!(!looks_like_pdf("notes.txt", Some("text/plain")));
        assert!(!looks_like_pdf("pdf", None));
    }
}
