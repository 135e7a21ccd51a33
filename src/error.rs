//! Library error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The widget was built without something it structurally requires
    #[error("dropdown setup failed: {0}")]
    Setup(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
