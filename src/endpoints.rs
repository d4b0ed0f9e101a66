//! Descriptors for the remote BabelNet operations.

use crate::params::{Endpoint, ParamSpec};

/// Parameters shared by the word-keyed lookups.
const WORD_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("word"),
    ParamSpec::optional("lang"),
    ParamSpec::optional("filterLangs"),
    ParamSpec::optional("pos"),
    ParamSpec::optional("source"),
    ParamSpec::optional("normalizer"),
];

/// `getVersion`: the API version string.
pub const GET_VERSION: Endpoint = Endpoint {
    name: "getVersion",
    params: &[],
};

/// `getSynsetIds`: ids of the synsets denoted by a word.
pub const GET_SYNSET_IDS: Endpoint = Endpoint {
    name: "getSynsetIds",
    params: WORD_PARAMS,
};

/// `getSynset`: details of one synset.
pub const GET_SYNSET: Endpoint = Endpoint {
    name: "getSynset",
    params: &[ParamSpec::required("id"), ParamSpec::optional("filterLangs")],
};

/// `getSenses`: senses of a word.
pub const GET_SENSES: Endpoint = Endpoint {
    name: "getSenses",
    params: WORD_PARAMS,
};

/// `getEdges`: outgoing semantic-graph edges of a synset.
pub const GET_EDGES: Endpoint = Endpoint {
    name: "getEdges",
    params: &[ParamSpec::required("id")],
};

impl Endpoint {
    /// Every operation the client knows about.
    pub const ALL: [Endpoint; 5] = [GET_VERSION, GET_SYNSET_IDS, GET_SYNSET, GET_SENSES, GET_EDGES];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_names_match_remote_paths() {
        let names: Vec<_> = Endpoint::ALL.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            ["getVersion", "getSynsetIds", "getSynset", "getSenses", "getEdges"]
        );
    }

    #[test]
    fn word_lookups_declare_same_parameters() {
        let ids: Vec<_> = GET_SYNSET_IDS.param_names().collect();
        let senses: Vec<_> = GET_SENSES.param_names().collect();
        assert_eq!(ids, senses);
        assert_eq!(
            ids,
            ["word", "lang", "filterLangs", "pos", "source", "normalizer"]
        );
    }

    #[test]
    fn only_identifiers_are_required() {
        for endpoint in Endpoint::ALL {
            for spec in endpoint.params {
                assert_eq!(spec.required, matches!(spec.name, "word" | "id"));
                assert!(spec.builtin_default.is_none());
            }
        }
    }
}
