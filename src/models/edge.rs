//! Edge model and the `getEdges` operation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::BabelNetClient;
use crate::endpoints::GET_EDGES;
use crate::error::Result;
use crate::models::null_as_default;

/// A labeled relation from one synset to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Language the relation was harvested from ("MUL" for multilingual).
    #[serde(default)]
    pub language: Option<String>,

    /// The relation type.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pointer: Pointer,

    /// Target synset id.
    pub target: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub normalized_weight: f64,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Relation type of an [`Edge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointer {
    /// Pointer symbol (e.g. "@" for hypernym).
    #[serde(default, rename = "fSymbol")]
    pub symbol: Option<String>,

    /// Relation name (e.g. "Hypernym").
    #[serde(default)]
    pub name: Option<String>,

    /// Short relation name (e.g. "is-a").
    #[serde(default)]
    pub short_name: Option<String>,

    /// Relation group (e.g. "HYPERNYM", "HYPONYM", "OTHER").
    #[serde(default)]
    pub relation_group: Option<String>,

    /// Whether the relation was extracted automatically.
    #[serde(default)]
    pub is_automatic: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    /// Human-readable relation label, most specific first.
    pub fn relation(&self) -> &str {
        self.pointer
            .name
            .as_deref()
            .or(self.pointer.short_name.as_deref())
            .or(self.pointer.symbol.as_deref())
            .unwrap_or("unknown")
    }

    /// Whether the relation was extracted automatically.
    pub fn is_automatic(&self) -> bool {
        self.pointer.is_automatic.unwrap_or(false)
    }

    /// Whether this edge's relation group is `group` (case-insensitive).
    pub fn in_group(&self, group: &str) -> bool {
        self.pointer
            .relation_group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case(group))
    }
}

impl BabelNetClient {
    /// Retrieve the edges of a given synset.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a list
    /// of edges.
    #[tracing::instrument(skip(self))]
    pub async fn get_edges(&self, id: &str) -> Result<Vec<Edge>> {
        let value = self.exec(&GET_EDGES, &[Some(id)]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
