//! Host document error types.

/// A [`Result`](std::result::Result) with a host [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error reading, writing or mutating a host document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The document or a command could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A call referred to an object the document does not contain.
    #[error("no object with id `{0}` in the document")]
    UnknownObject(String),
    /// The document lacks the `canvas` settings an operation needs.
    #[error("the document has no canvas settings")]
    MissingCanvas,
}
