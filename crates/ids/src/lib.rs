//! Deterministic identity scheme for uploads, entries and archives.
//!
//! Every id is a plain string over the websafe alphabet `[A-Za-z0-9\-_]`
//! (archive ids additionally carry one `/`), so ids can be embedded in
//! URLs, file paths and database keys without escaping. All operations are
//! pure and thread-safe; errors surface synchronously to the caller.

pub mod archive;
pub mod encode;
pub mod error;
pub mod hash;
pub mod uid;

pub use encode::{decode_handle_id, websafe_decode, websafe_encode};
pub use error::{IdError, Result};
pub use hash::{generate_entry_id, websafe_hash, WebsafeHasher, DEFAULT_HASH_LEN, FULL_HASH_LEN};
pub use uid::{adjust_uuid_size, create_uuid};
