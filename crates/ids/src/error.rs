use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdError {
    /// A hash input produced no canonical textual form (its formatter failed).
    #[error("value has no canonical textual form")]
    Encoding,

    /// An archive id had fewer than two `/`-separated segments.
    #[error("malformed archive id: {0:?}")]
    MalformedId(String),

    /// An upload id contained the `/` reserved for archive-id composition.
    #[error("upload id must not contain '/': {0:?}")]
    InvalidUploadId(String),

    #[error("invalid websafe base64")]
    Decode(#[from] base64::DecodeError),

    /// A handle suffix contained a character outside `0-9a-v`.
    #[error("invalid handle character: {0:?}")]
    InvalidHandle(char),

    #[error("handle value exceeds 64 bits: {0:?}")]
    HandleOverflow(String),

    /// An id was longer than the fixed width it should be padded to.
    #[error("id {id:?} is longer than {width} characters")]
    Overlong { id: String, width: usize },
}

pub type Result<T> = std::result::Result<T, IdError>;
