//! Error type shared by page composition, configuration and profile loading.
//!
//! Scroll and observation never fail: a missing section is a valid steady state, so nothing in
//! the scroll-spy path returns this type.

use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can stop a page from being composed or a profile from being read.
pub enum Error {
    /// A section token that does not name a known page region.
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    /// The same section appears twice in one page.
    #[error("section {0} is registered more than once")]
    DuplicateSection(&'static str),
    /// A page with no sections has nothing to navigate.
    #[error("a page needs at least one section")]
    EmptyRegistry,
    /// The configuration file exists but could not be parsed.
    #[error("config error: {0}")]
    Config(String),
    /// The profile file is not valid profile JSON.
    #[error("profile error: {0}")]
    Profile(#[from] serde_json::Error),
    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(io) => io,
            other => Self::other(other),
        }
    }
}
