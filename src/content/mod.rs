//! Content object model: objects, metadata, key paths and the id index.

mod index;
mod key_path;
mod object;

pub use index::ObjectIndex;
pub use key_path::{Key, KeyPath};
pub use object::{ContentObject, InputError, Metadata, decode_objects};

/// A JSON object map for storing arbitrary content fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Reserved field holding an object's [`Metadata`].
pub const METADATA_KEY: &str = "__metadata";

/// Field injected into referenced objects with their derived URL.
pub const URL_KEY: &str = "url";
