//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::WordQuery;

/// Parameters for the `get_synset_ids` and `get_senses` MCP tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordParams {
    /// The word to look up.
    pub word: String,
    /// Language of the word (e.g. "EN").
    #[serde(default)]
    pub lang: Option<String>,
    /// Languages to restrict the results to.
    #[serde(default)]
    pub filter_langs: Option<String>,
    /// Part of speech (e.g. "NOUN", "VERB").
    #[serde(default)]
    pub pos: Option<String>,
    /// Sense source (e.g. "WIKI", "WN").
    #[serde(default)]
    pub source: Option<String>,
    /// Lemma normalization flag.
    #[serde(default)]
    pub normalizer: Option<String>,
}

impl From<WordParams> for WordQuery {
    fn from(params: WordParams) -> Self {
        WordQuery {
            word: params.word,
            lang: params.lang,
            filter_langs: params.filter_langs,
            pos: params.pos,
            source: params.source,
            normalizer: params.normalizer,
        }
    }
}

/// Parameters for the `get_synset` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SynsetParams {
    /// Synset id (e.g. "bn:00015267n").
    pub id: String,
    /// Languages to restrict the senses and glosses to.
    #[serde(default)]
    pub filter_langs: Option<String>,
}

/// Parameters for the `get_edges` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EdgesParams {
    /// Synset id (e.g. "bn:00015267n").
    pub id: String,
}
