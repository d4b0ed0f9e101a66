//! Synset model and the `getSynsetIds` / `getSynset` operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::BabelNetClient;
use crate::endpoints::{GET_SYNSET, GET_SYNSET_IDS};
use crate::error::{BabelNetError, Result};
use crate::models::null_as_default;
use crate::models::query::WordQuery;
use crate::models::sense::Sense;

/// A set of interlingual senses denoting one concept.
///
/// Open-ended parts of the payload (translations, compounds, other forms)
/// are kept verbatim in [`Synset::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synset {
    /// Senses lexicalizing this concept, across languages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,

    /// Definitions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub glosses: Vec<Gloss>,

    /// Usage examples.
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<Example>,

    /// Illustrations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// "CONCEPT" or "NAMED_ENTITY".
    #[serde(default)]
    pub synset_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,

    /// Domain labels with confidence scores.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: BTreeMap<String, f64>,

    /// WordNet offsets mapped to this synset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wn_offsets: Vec<Value>,

    /// Languages the response was restricted to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub filter_langs: Vec<String>,

    /// Whether this is a key concept.
    #[serde(default)]
    pub bkey_concepts: Option<bool>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A definition of a synset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gloss {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub source_sense: Option<Value>,

    #[serde(default)]
    pub language: Option<String>,

    /// The definition text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gloss: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A usage example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub example: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An image attached to a synset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub thumb_url: Option<String>,

    #[serde(default)]
    pub license: Option<String>,

    /// Flagged as unsuitable by the source.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bad_image: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A category label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,

    #[serde(default)]
    pub language: Option<String>,
}

impl Synset {
    /// The synset id, taken from its senses.
    pub fn id(&self) -> Option<&str> {
        self.senses.iter().find_map(Sense::synset)
    }

    /// First gloss in `lang`.
    pub fn gloss_in(&self, lang: &str) -> Option<&str> {
        self.glosses
            .iter()
            .find(|g| {
                g.language
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(lang))
            })
            .map(|g| g.gloss.as_str())
    }

    /// Senses in `lang`.
    pub fn senses_in<'a>(&'a self, lang: &'a str) -> impl Iterator<Item = &'a Sense> + 'a {
        self.senses.iter().filter(move |s| s.is_in(lang))
    }

    /// Distinct display lemmas, in sense order.
    pub fn lemmas(&self) -> Vec<String> {
        let mut lemmas: Vec<String> = Vec::new();
        for lemma in self.senses.iter().filter_map(Sense::display_lemma) {
            if !lemmas.contains(&lemma) {
                lemmas.push(lemma);
            }
        }
        lemmas
    }

    /// Whether this synset denotes a named entity.
    pub fn is_named_entity(&self) -> bool {
        self.synset_type.as_deref() == Some("NAMED_ENTITY")
    }
}

/// Pull the `id` field out of each element of a `getSynsetIds` response.
fn project_ids(value: Value) -> Result<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(BabelNetError::UnexpectedResponse {
            endpoint: GET_SYNSET_IDS.name,
            expected: "an array of synset ids",
        });
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(mut obj) => match obj.remove("id") {
                Some(Value::String(id)) => Some(id),
                _ => None,
            },
            _ => None,
        })
        .collect())
}

impl BabelNetClient {
    /// Retrieve the ids of the synsets denoted by a word.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not an
    /// array.
    #[tracing::instrument(skip(self))]
    pub async fn get_synset_ids(&self, query: &WordQuery) -> Result<Vec<String>> {
        let value = self.exec(&GET_SYNSET_IDS, &query.args()).await?;
        project_ids(value)
    }

    /// Retrieve the information of a given synset.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not
    /// describe a synset.
    #[tracing::instrument(skip(self))]
    pub async fn get_synset_by_id(&self, id: &str, filter_langs: Option<&str>) -> Result<Synset> {
        let value = self.exec(&GET_SYNSET, &[Some(id), filter_langs]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
