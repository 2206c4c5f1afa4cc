//! Random websafe ids.

use uuid::Uuid;

use crate::encode::websafe_encode;
use crate::error::{IdError, Result};

/// Generate a random websafe id from a v4 uuid.
///
/// 16 random bytes encode to exactly 22 websafe characters.
pub fn create_uuid() -> String {
    websafe_encode(Uuid::new_v4().as_bytes())
}

/// Left-pad an id with spaces to the fixed `width`.
///
/// Ids shorter than the generated hash length (random uuids are 22 chars,
/// hashes 28) are padded so they sort and store uniformly.
pub fn adjust_uuid_size(id: &str, width: usize) -> Result<String> {
    if id.len() > width {
        return Err(IdError::Overlong {
            id: id.to_owned(),
            width,
        });
    }
    Ok(format!("{id:>width$}"))
}
