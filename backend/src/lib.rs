//! Server-side code for the document processor: document service client,
//! PDF page rendering, and extra axum routes.

pub mod api;
pub mod service_utils;
pub mod server_extra;
