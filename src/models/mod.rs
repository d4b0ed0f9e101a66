//! Result models and the operations that produce them.

use serde::{Deserialize, Deserializer};

pub mod edge;
pub mod query;
pub mod sense;
pub mod synset;
mod version;

pub use edge::{Edge, Pointer};
pub use query::WordQuery;
pub use sense::{Sense, SynsetRef};
pub use synset::{Category, Example, Gloss, Image, Synset};

/// Deserialize a field that may be `null`, falling back to its default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
