//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use std::collections::BTreeMap;

use serde_json::Map;

use crate::{Edge, Example, Gloss, Pointer, Sense, Synset, SynsetRef};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Synset id of "dog" (domestic dog) in the default scenario.
pub const DOG: &str = "bn:00015267n";
/// Synset id of "canine" in the default scenario.
pub const CANINE: &str = "bn:00015266n";
/// Synset id of "dog" (to chase) in the default scenario.
pub const DOG_VERB: &str = "bn:00087764v";
/// Synset id of "hot dog" in the default scenario.
pub const HOT_DOG: &str = "bn:00046516n";

impl Fixtures {
    // =========================================================================
    // Sense Fixtures
    // =========================================================================

    /// Create a sense pointing at `synset_id`.
    pub fn sense(lemma: &str, language: &str, pos: &str, source: &str, synset_id: &str) -> Sense {
        Sense {
            lemma: Some(lemma.to_string()),
            full_lemma: None,
            simple_lemma: Some(lemma.to_string()),
            source: Some(source.to_string()),
            sense_key: None,
            frequency: None,
            language: Some(language.to_string()),
            pos: Some(pos.to_string()),
            synset_id: Some(SynsetRef {
                id: synset_id.to_string(),
                pos: Some(pos.to_string()),
                source: Some("BABELNET".to_string()),
            }),
            kind: None,
            extra: Map::new(),
        }
    }

    // =========================================================================
    // Synset Fixtures
    // =========================================================================

    /// Create a concept synset with only senses.
    pub fn synset(senses: Vec<Sense>) -> Synset {
        Synset {
            senses,
            synset_type: Some("CONCEPT".to_string()),
            ..Default::default()
        }
    }

    /// Create a gloss.
    pub fn gloss(language: &str, source: &str, text: &str) -> Gloss {
        Gloss {
            source: Some(source.to_string()),
            language: Some(language.to_string()),
            gloss: text.to_string(),
            ..Default::default()
        }
    }

    /// Create a usage example.
    pub fn example(language: &str, text: &str) -> Example {
        Example {
            source: Some("WN".to_string()),
            language: Some(language.to_string()),
            example: text.to_string(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Edge Fixtures
    // =========================================================================

    /// Create an edge to `target`.
    pub fn edge(target: &str, name: &str, symbol: &str, group: &str, language: &str) -> Edge {
        Edge {
            language: Some(language.to_string()),
            pointer: Pointer {
                symbol: Some(symbol.to_string()),
                name: Some(name.to_string()),
                short_name: None,
                relation_group: Some(group.to_string()),
                is_automatic: Some(false),
                extra: Map::new(),
            },
            target: target.to_string(),
            weight: 0.0,
            normalized_weight: 0.0,
            extra: Map::new(),
        }
    }

    /// Create a hypernym ("is-a") edge.
    pub fn hypernym(target: &str) -> Edge {
        let mut edge = Self::edge(target, "Hypernym", "@", "HYPERNYM", "EN");
        edge.pointer.short_name = Some("is-a".to_string());
        edge
    }

    /// Create a hyponym ("has-kind") edge.
    pub fn hyponym(target: &str) -> Edge {
        let mut edge = Self::edge(target, "Hyponym", "~", "HYPONYM", "EN");
        edge.pointer.short_name = Some("has-kind".to_string());
        edge
    }

    // =========================================================================
    // Scenario
    // =========================================================================

    /// Create a complete "dog" scenario.
    pub fn default_scenario() -> DefaultScenario {
        let mut dog = Self::synset(vec![
            Self::sense("dog", "EN", "NOUN", "WN", DOG),
            Self::sense("domestic_dog", "EN", "NOUN", "WN", DOG),
            Self::sense("Dog", "EN", "NOUN", "WIKI", DOG),
            Self::sense("cane", "IT", "NOUN", "WIKI", DOG),
            Self::sense("Hund", "DE", "NOUN", "WIKI", DOG),
        ]);
        dog.glosses = vec![
            Self::gloss(
                "EN",
                "WN",
                "A member of the genus Canis that has been domesticated by man since prehistoric times",
            ),
            Self::gloss("IT", "WIKI", "Il cane domestico è un mammifero carnivoro"),
        ];
        dog.examples = vec![Self::example("EN", "the dog barked all night")];
        dog.domains = BTreeMap::from([("ANIMALS".to_string(), 0.93)]);

        let mut canine = Self::synset(vec![
            Self::sense("canine", "EN", "NOUN", "WN", CANINE),
            Self::sense("canid", "EN", "NOUN", "WN", CANINE),
            Self::sense("canide", "IT", "NOUN", "WIKI", CANINE),
        ]);
        canine.glosses = vec![Self::gloss(
            "EN",
            "WN",
            "Any of various fissiped mammals with nonretractile claws",
        )];

        let mut dog_verb = Self::synset(vec![
            Self::sense("dog", "EN", "VERB", "WN", DOG_VERB),
            Self::sense("chase", "EN", "VERB", "WN", DOG_VERB),
            Self::sense("tail", "EN", "VERB", "WN", DOG_VERB),
        ]);
        dog_verb.glosses = vec![Self::gloss(
            "EN",
            "WN",
            "Go after with the intent to catch",
        )];

        let mut hot_dog = Self::synset(vec![
            Self::sense("hot_dog", "EN", "NOUN", "WN", HOT_DOG),
            Self::sense("frankfurter", "EN", "NOUN", "WN", HOT_DOG),
            Self::sense("hot_dog", "IT", "NOUN", "WIKI", HOT_DOG),
        ]);
        hot_dog.glosses = vec![Self::gloss(
            "EN",
            "WN",
            "A smooth-textured sausage of minced beef or pork usually smoked",
        )];

        let mut related = Self::edge(HOT_DOG, "Semantically related form", "r", "OTHER", "MUL");
        related.pointer.is_automatic = Some(true);
        related.weight = 0.0042;
        related.normalized_weight = 0.12;

        DefaultScenario {
            version: "V4_0".to_string(),
            synsets: vec![
                (DOG.to_string(), dog),
                (CANINE.to_string(), canine),
                (DOG_VERB.to_string(), dog_verb),
                (HOT_DOG.to_string(), hot_dog),
            ],
            edges: vec![
                (DOG.to_string(), vec![Self::hypernym(CANINE), related]),
                (CANINE.to_string(), vec![Self::hyponym(DOG)]),
            ],
        }
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub version: String,
    pub synsets: Vec<(String, Synset)>,
    pub edges: Vec<(String, Vec<Edge>)>,
}
