//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the babelnet binary.

use clap::{Args, Parser, Subcommand};

use crate::{BabelNetError, DefaultParams, WordQuery};

/// BabelNet API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "babelnet", about = "BabelNet HTTP API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Default parameter applied when a command omits it (e.g. `lang=EN`).
    #[arg(
        short = 'D',
        long = "default",
        global = true,
        value_name = "NAME=VALUE",
        value_parser = DefaultParams::parse_pair
    )]
    pub defaults: Vec<(String, String)>,

    /// Skip TLS certificate and host verification.
    #[arg(long, global = true, default_value = "false")]
    pub insecure: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the BabelNet version.
    Version,

    /// List the ids of the synsets denoted by a word.
    SynsetIds(WordArgs),

    /// Show a synset by id.
    Synset {
        /// Synset id (e.g. `bn:00015267n`).
        id: String,

        /// Languages to restrict the senses and glosses to.
        #[arg(long)]
        filter_langs: Option<String>,
    },

    /// List the senses of a word.
    Senses(WordArgs),

    /// List the outgoing edges of a synset.
    Edges {
        /// Synset id (e.g. `bn:00015267n`).
        id: String,
    },

    /// Serve the MCP tools over stdio.
    Mcp,
}

/// Arguments of the word-keyed lookups.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct WordArgs {
    /// The word to look up.
    pub word: String,

    /// Language of the word (e.g. `EN`).
    #[arg(long)]
    pub lang: Option<String>,

    /// Languages to restrict the results to.
    #[arg(long)]
    pub filter_langs: Option<String>,

    /// Part of speech (e.g. `NOUN`).
    #[arg(long)]
    pub pos: Option<String>,

    /// Sense source (e.g. `WIKI`).
    #[arg(long)]
    pub source: Option<String>,

    /// Lemma normalization flag.
    #[arg(long)]
    pub normalizer: Option<String>,
}

impl From<WordArgs> for WordQuery {
    fn from(args: WordArgs) -> Self {
        WordQuery {
            word: args.word,
            lang: args.lang,
            filter_langs: args.filter_langs,
            pos: args.pos,
            source: args.source,
            normalizer: args.normalizer,
        }
    }
}

/// Hint printed under a client setup error, when one applies.
pub fn setup_hint(err: &BabelNetError) -> Option<&'static str> {
    match err {
        BabelNetError::ConfigMissing(_) => Some("Set BABELNET_API_KEY environment variable"),
        _ => None,
    }
}
