//! Websafe content hashing and entry-id derivation.
//!
//! Ids generated here are persisted as directory names, database keys and
//! URL path segments, so the output is a compatibility contract: SHA-512
//! over the concatenated UTF-8 forms of the inputs, rendered in the
//! URL-safe base64 alphabet (`-`/`_`), 28 characters by default.

use std::fmt::{self, Display, Write as _};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use sha2::{Digest, Sha512};

use crate::error::{IdError, Result};

/// Default length of generated ids in characters.
pub const DEFAULT_HASH_LEN: usize = 28;

/// Length of the full websafe digest (the 88-char padded encoding of a
/// 64-byte SHA-512 digest, minus its fixed `==` trailer).
pub const FULL_HASH_LEN: usize = 86;

/// Incremental websafe hasher.
///
/// Parts are concatenated without separators before hashing, so
/// `("ab", "c")` and `("a", "bc")` feed identical byte streams. Callers that
/// need the tuple boundaries to matter must frame their inputs themselves.
pub struct WebsafeHasher {
    inner: Sha512,
}

impl WebsafeHasher {
    pub fn new() -> Self {
        Self {
            inner: Sha512::new(),
        }
    }

    /// Feed one string part into the hash.
    pub fn update(&mut self, part: &str) {
        self.inner.update(part.as_bytes());
    }

    /// Feed the canonical textual form of any displayable value.
    ///
    /// The canonical form is the value's `Display` output; it is written
    /// straight into the digest without an intermediate allocation.
    pub fn update_value(&mut self, value: &dyn Display) -> Result<()> {
        write!(DigestWriter(&mut self.inner), "{value}").map_err(|_| IdError::Encoding)
    }

    /// Finalize at the default id length.
    pub fn finish(self) -> String {
        self.finish_with_len(DEFAULT_HASH_LEN)
    }

    /// Finalize at the given length.
    ///
    /// A positive `length` truncates the encoded digest to exactly that many
    /// characters; `0` returns the full digest of [`FULL_HASH_LEN`]
    /// characters. Lengths beyond the encoded digest are clamped to it.
    pub fn finish_with_len(self, length: usize) -> String {
        make_websafe(&self.inner.finalize(), length)
    }
}

impl Default for WebsafeHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter feeding formatted text directly into the digest.
struct DigestWriter<'a>(&'a mut Sha512);

impl fmt::Write for DigestWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.update(s.as_bytes());
        Ok(())
    }
}

/// Encode a digest in the websafe base64 alphabet and cut it to `length`.
///
/// The `length == 0` branch strips the 2-character `=` padding a 64-byte
/// digest always ends with; the constant is tied to SHA-512's output size.
fn make_websafe(digest: &[u8], length: usize) -> String {
    let mut encoded = URL_SAFE.encode(digest);
    if length > 0 {
        encoded.truncate(length);
    } else {
        encoded.truncate(encoded.len().saturating_sub(2));
    }
    encoded
}

/// Websafe hash of the given parts, concatenated in order.
pub fn websafe_hash(parts: &[&dyn Display], length: usize) -> Result<String> {
    let mut hasher = WebsafeHasher::new();
    for part in parts {
        hasher.update_value(part)?;
    }
    Ok(hasher.finish_with_len(length))
}

/// Generate the stable id of an entry.
///
/// `mainfile_key` distinguishes entries when one mainfile holds several; an
/// empty key counts as absent. The same `(upload_id, mainfile, mainfile_key)`
/// triple always yields the same id, which keeps re-processing idempotent.
pub fn generate_entry_id(upload_id: &str, mainfile: &str, mainfile_key: Option<&str>) -> String {
    let mut hasher = WebsafeHasher::new();
    hasher.update(upload_id);
    hasher.update(mainfile);
    if let Some(key) = mainfile_key.filter(|key| !key.is_empty()) {
        hasher.update(key);
    }
    hasher.finish()
}
