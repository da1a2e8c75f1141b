//! Backend API exposed to the frontend server functions.

pub mod documents;
pub mod prompts;
