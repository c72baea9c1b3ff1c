//! Error types for the documentation pipeline.
//!
//! Three failure classes, all fatal: a connection that never produced a
//! response, a response with a non-success status, and local file I/O.
//! Unparsable source text is not an error anywhere in the pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocError>;

#[derive(Error, Debug)]
pub enum DocError {
    /// Connection could not be established
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response carried a non-success HTTP status
    #[error("HTTP {status} for {url}")]
    Fetch { status: u16, url: String },

    /// Preamble read or output write failed
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
