//! Bootstrap errors.
//!
//! The rendered page itself cannot fail; only attaching it to the host
//! document and reading the page URL can.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandingError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount point #{0} not found in document")]
    MissingMountPoint(String),

    #[error("unreadable query string `{0}`")]
    InvalidQuery(String),

    #[error("invalid log level `{0}` (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
