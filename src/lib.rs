//! protodoc — enum reference generation from remote proto sources.
//!
//! The pipeline stages are plain functions over plain data: fetch text,
//! extract [`model::EnumDoc`]s, render Markdown sections, assemble and write
//! the page. Everything except the fetcher and the writer is pure, so the
//! interesting parts are testable without network or filesystem access.

pub mod assemble;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parser;
pub mod render;
