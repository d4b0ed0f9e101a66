//! Mock server state management.
//!
//! Provides the in-memory knowledge base for the mock BabelNet API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Edge, Sense, Synset, SynsetRef};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Value returned by `getVersion`.
    pub version: String,

    /// Synsets indexed by id (e.g. "bn:00015267n").
    pub synsets: BTreeMap<String, Synset>,

    /// Outgoing edges indexed by source synset id.
    pub edges: HashMap<String, Vec<Edge>>,

    /// Optional API key. If set, requests must carry exactly this key.
    pub required_key: Option<String>,
}

/// Filters shared by the word lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordFilter<'a> {
    pub lang: Option<&'a str>,
    pub pos: Option<&'a str>,
    pub source: Option<&'a str>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Set the version string.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Add a synset to the state.
    pub fn with_synset(mut self, id: &str, synset: Synset) -> Self {
        self.synsets.insert(id.to_string(), synset);
        self
    }

    /// Add outgoing edges for a synset.
    pub fn with_edges(mut self, id: &str, edges: Vec<Edge>) -> Self {
        self.edges.entry(id.to_string()).or_default().extend(edges);
        self
    }

    /// Set the required API key.
    pub fn with_required_key(mut self, key: &str) -> Self {
        self.required_key = Some(key.to_string());
        self
    }

    /// Whether `key` is accepted.
    pub fn accepts_key(&self, key: Option<&str>) -> bool {
        match (key.filter(|k| !k.is_empty()), &self.required_key) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(key), Some(required)) => key == required,
        }
    }

    /// Get a synset by id.
    pub fn get_synset(&self, id: &str) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Get the edges of a synset. Unknown ids have no edges.
    pub fn get_edges(&self, id: &str) -> &[Edge] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Senses whose lemma matches `word`, in synset order.
    pub fn find_senses(&self, word: &str, filter: WordFilter<'_>) -> Vec<&Sense> {
        let word = normalize(word);
        self.synsets
            .values()
            .flat_map(|s| s.senses.iter())
            .filter(|s| sense_matches(s, &word, filter))
            .collect()
    }

    /// References to the synsets with a sense matching `word`.
    pub fn find_synset_ids(&self, word: &str, filter: WordFilter<'_>) -> Vec<SynsetRef> {
        let word = normalize(word);
        self.synsets
            .iter()
            .filter_map(|(id, synset)| {
                synset
                    .senses
                    .iter()
                    .find(|s| sense_matches(s, &word, filter))
                    .map(|s| SynsetRef {
                        id: id.clone(),
                        pos: s.pos.clone(),
                        source: Some("BABELNET".to_string()),
                    })
            })
            .collect()
    }
}

/// Lowercase a lemma and treat underscores as spaces.
fn normalize(lemma: &str) -> String {
    lemma.replace('_', " ").to_lowercase()
}

fn field_matches(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => value.is_some_and(|v| v.eq_ignore_ascii_case(w)),
    }
}

fn sense_matches(sense: &Sense, word: &str, filter: WordFilter<'_>) -> bool {
    sense.lemma.as_deref().map(normalize).as_deref() == Some(word)
        && field_matches(sense.language.as_deref(), filter.lang)
        && field_matches(sense.pos.as_deref(), filter.pos)
        && field_matches(sense.source.as_deref(), filter.source)
}
