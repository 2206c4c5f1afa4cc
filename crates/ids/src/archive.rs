//! Composite archive ids of the form `<upload_id>/<entry_id>`.
//!
//! The `/` is reserved: [`create`] rejects upload ids containing it, which
//! keeps [`split`] the exact inverse of [`create`].

use crate::error::{IdError, Result};

/// Compose an archive id from its parts.
pub fn create(upload_id: &str, entry_id: &str) -> Result<String> {
    if upload_id.contains('/') {
        return Err(IdError::InvalidUploadId(upload_id.to_owned()));
    }
    Ok(format!("{upload_id}/{entry_id}"))
}

/// Split an archive id into `(upload_id, entry_id)`.
pub fn split(archive_id: &str) -> Result<(&str, &str)> {
    archive_id
        .split_once('/')
        .ok_or_else(|| IdError::MalformedId(archive_id.to_owned()))
}

/// The upload id of an archive id.
pub fn upload_id(archive_id: &str) -> Result<&str> {
    Ok(split(archive_id)?.0)
}

/// The entry id of an archive id.
pub fn entry_id(archive_id: &str) -> Result<&str> {
    Ok(split(archive_id)?.1)
}
