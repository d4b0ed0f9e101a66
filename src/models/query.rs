//! Arguments shared by the word-keyed lookups.

use serde::Serialize;

/// A word lookup for `getSynsetIds` and `getSenses`.
///
/// Optional fields left as `None` (or empty) fall back to the client's
/// default parameters.
///
/// # Example
///
/// ```
/// use babelnet::WordQuery;
///
/// let query = WordQuery::new("dog").with_lang("EN").with_pos("NOUN");
/// assert_eq!(query.word, "dog");
/// assert_eq!(query.lang.as_deref(), Some("EN"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordQuery {
    /// The word to look up.
    pub word: String,

    /// Language of the word (e.g. `EN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Languages to restrict the results to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_langs: Option<String>,

    /// Part of speech (e.g. `NOUN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,

    /// Sense source (e.g. `WIKI`, `WN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Whether to normalize the lemma before lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<String>,
}

impl WordQuery {
    /// Look up `word` with every optional argument left to the defaults.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_filter_langs(mut self, filter_langs: impl Into<String>) -> Self {
        self.filter_langs = Some(filter_langs.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_normalizer(mut self, normalizer: impl Into<String>) -> Self {
        self.normalizer = Some(normalizer.into());
        self
    }

    /// Positional arguments in the order the word endpoints declare them.
    pub(crate) fn args(&self) -> [Option<&str>; 6] {
        [
            Some(self.word.as_str()),
            self.lang.as_deref(),
            self.filter_langs.as_deref(),
            self.pos.as_deref(),
            self.source.as_deref(),
            self.normalizer.as_deref(),
        ]
    }
}

impl From<&str> for WordQuery {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for WordQuery {
    fn from(word: String) -> Self {
        Self::new(word)
    }
}
