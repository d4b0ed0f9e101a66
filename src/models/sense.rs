//! Sense model and the `getSenses` operation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::BabelNetClient;
use crate::endpoints::GET_SENSES;
use crate::error::Result;
use crate::models::query::WordQuery;

/// A word form paired with a meaning in a given language.
///
/// Both the flat v4 layout and the typed layout
/// (`{"type": "WordNetSense", "properties": {...}}`) decode into this struct.
/// Fields found inside `properties` win over top-level ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSense")]
pub struct Sense {
    /// Lemma, with underscores for spaces (e.g. "hot_dog").
    pub lemma: Option<String>,

    /// Lemma including source-specific decorations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_lemma: Option<String>,

    /// Lemma without source-specific decorations.
    pub simple_lemma: Option<String>,

    /// Resource the sense comes from (e.g. "WIKI", "WN").
    pub source: Option<String>,

    /// Source-specific sense key ("sensekey" or "senseKey" on the wire).
    #[serde(rename = "sensekey")]
    pub sense_key: Option<String>,

    /// Frequency count, when the source provides one.
    pub frequency: Option<u64>,

    /// Language code (e.g. "EN").
    pub language: Option<String>,

    /// Part of speech (e.g. "NOUN").
    pub pos: Option<String>,

    /// The synset this sense belongs to.
    #[serde(rename = "synsetID")]
    pub synset_id: Option<SynsetRef>,

    /// Sense kind of the typed layout (e.g. "WikiSense").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of a sense, before the `properties` envelope is folded in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSense {
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default)]
    full_lemma: Option<String>,
    #[serde(default)]
    simple_lemma: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default, rename = "sensekey")]
    sensekey: Option<String>,
    #[serde(default)]
    sense_key: Option<String>,
    #[serde(default)]
    frequency: Option<u64>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    pos: Option<String>,
    #[serde(default, rename = "synsetID")]
    synset_id: Option<SynsetRef>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    properties: Option<Box<RawSense>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RawSense {
    /// Fill fields missing here from `outer`.
    fn fill_from(mut self, outer: RawSense) -> RawSense {
        self.lemma = self.lemma.or(outer.lemma);
        self.full_lemma = self.full_lemma.or(outer.full_lemma);
        self.simple_lemma = self.simple_lemma.or(outer.simple_lemma);
        self.source = self.source.or(outer.source);
        self.sensekey = self.sensekey.or(outer.sensekey);
        self.sense_key = self.sense_key.or(outer.sense_key);
        self.frequency = self.frequency.or(outer.frequency);
        self.language = self.language.or(outer.language);
        self.pos = self.pos.or(outer.pos);
        self.synset_id = self.synset_id.or(outer.synset_id);
        self.kind = self.kind.or(outer.kind);
        for (name, value) in outer.extra {
            self.extra.entry(name).or_insert(value);
        }
        self
    }
}

impl From<RawSense> for Sense {
    fn from(mut raw: RawSense) -> Self {
        if let Some(inner) = raw.properties.take() {
            return Sense::from((*inner).fill_from(raw));
        }
        Sense {
            lemma: raw.lemma,
            full_lemma: raw.full_lemma,
            simple_lemma: raw.simple_lemma,
            source: raw.source,
            sense_key: raw.sensekey.or(raw.sense_key),
            frequency: raw.frequency,
            language: raw.language,
            pos: raw.pos,
            synset_id: raw.synset_id,
            kind: raw.kind,
            extra: raw.extra,
        }
    }
}

/// Reference to a synset, as embedded in senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRef {
    /// Synset identifier (e.g. "bn:00015267n").
    pub id: String,

    #[serde(default)]
    pub pos: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

impl Sense {
    /// The lemma with underscores replaced by spaces.
    pub fn display_lemma(&self) -> Option<String> {
        self.lemma
            .as_deref()
            .or(self.full_lemma.as_deref())
            .or(self.simple_lemma.as_deref())
            .map(|l| l.replace('_', " "))
    }

    /// Id of the synset this sense belongs to.
    pub fn synset(&self) -> Option<&str> {
        self.synset_id.as_ref().map(|s| s.id.as_str())
    }

    /// Whether this sense is in `lang` (case-insensitive).
    pub fn is_in(&self, lang: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(lang))
    }
}

impl BabelNetClient {
    /// Retrieve the senses of a word.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use babelnet::{BabelNetClient, WordQuery};
    ///
    /// # async fn example() -> babelnet::Result<()> {
    /// let client = BabelNetClient::from_env()?;
    /// let senses = client.get_senses(&WordQuery::new("dog").with_lang("EN")).await?;
    /// for sense in &senses {
    ///     println!("{:?} in {:?}", sense.display_lemma(), sense.synset());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a list
    /// of senses.
    #[tracing::instrument(skip(self))]
    pub async fn get_senses(&self, query: &WordQuery) -> Result<Vec<Sense>> {
        let value = self.exec(&GET_SENSES, &query.args()).await?;
        Ok(serde_json::from_value(value)?)
    }
}
