//! Axum routes served next to the dioxus app.

pub mod download_document;
