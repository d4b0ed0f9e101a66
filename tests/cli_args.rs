//! CLI argument parsing tests.

use babelnet::cli::{setup_hint, Cli, Command, WordArgs};
use babelnet::{BabelNetClient, BabelNetError, WordQuery};
use clap::Parser;

#[test]
fn test_cli_parses_version_subcommand() {
    let cli = Cli::parse_from(["babelnet", "version"]);

    assert!(!cli.json);
    assert!(!cli.insecure);
    assert!(cli.defaults.is_empty());
    assert!(matches!(cli.command, Command::Version));
}

#[test]
fn test_cli_parses_synset_ids_with_options() {
    let cli = Cli::parse_from([
        "babelnet",
        "synset-ids",
        "dog",
        "--lang",
        "EN",
        "--pos",
        "NOUN",
        "--filter-langs",
        "IT",
    ]);

    match cli.command {
        Command::SynsetIds(args) => {
            assert_eq!(args.word, "dog");
            assert_eq!(args.lang.as_deref(), Some("EN"));
            assert_eq!(args.pos.as_deref(), Some("NOUN"));
            assert_eq!(args.filter_langs.as_deref(), Some("IT"));
            assert!(args.source.is_none());
            assert!(args.normalizer.is_none());
        }
        _ => panic!("Expected SynsetIds command"),
    }
}

#[test]
fn test_cli_parses_synset_subcommand() {
    let cli = Cli::parse_from(["babelnet", "synset", "bn:00015267n", "--filter-langs", "EN"]);

    match cli.command {
        Command::Synset { id, filter_langs } => {
            assert_eq!(id, "bn:00015267n");
            assert_eq!(filter_langs.as_deref(), Some("EN"));
        }
        _ => panic!("Expected Synset command"),
    }
}

#[test]
fn test_cli_parses_senses_and_edges() {
    let cli = Cli::parse_from(["babelnet", "senses", "cane", "--source", "WIKI"]);
    assert!(matches!(
        cli.command,
        Command::Senses(WordArgs { ref word, .. }) if word == "cane"
    ));

    let cli = Cli::parse_from(["babelnet", "edges", "bn:00015267n"]);
    assert!(matches!(cli.command, Command::Edges { ref id } if id == "bn:00015267n"));

    let cli = Cli::parse_from(["babelnet", "mcp"]);
    assert!(matches!(cli.command, Command::Mcp));
}

#[test]
fn test_global_flags() {
    // before subcommand
    let cli = Cli::parse_from(["babelnet", "--json", "--insecure", "version"]);
    assert!(cli.json);
    assert!(cli.insecure);

    // after subcommand (global flags)
    let cli = Cli::parse_from(["babelnet", "senses", "dog", "--json", "-v"]);
    assert!(cli.json);
    assert!(cli.verbose);
}

#[test]
fn test_repeated_default_params() {
    let cli = Cli::parse_from([
        "babelnet",
        "-D",
        "lang=EN",
        "senses",
        "dog",
        "--default",
        "source=WIKI",
    ]);

    assert_eq!(
        cli.defaults,
        vec![
            ("lang".to_string(), "EN".to_string()),
            ("source".to_string(), "WIKI".to_string()),
        ]
    );
}

#[test]
fn test_malformed_default_is_rejected() {
    let result = Cli::try_parse_from(["babelnet", "-D", "lang", "version"]);
    assert!(result.is_err());
}

#[test]
fn test_word_args_convert_to_query() {
    let cli = Cli::parse_from(["babelnet", "senses", "dog", "--lang", "EN", "--normalizer", "true"]);

    let Command::Senses(args) = cli.command else {
        panic!("Expected Senses command");
    };
    assert_eq!(
        WordQuery::from(args),
        WordQuery::new("dog").with_lang("EN").with_normalizer("true")
    );
}

#[test]
fn test_setup_hint_only_for_missing_key() {
    let missing = BabelNetError::ConfigMissing("BABELNET_API_KEY environment variable not set".into());
    assert!(setup_hint(&missing).is_some_and(|h| h.contains("BABELNET_API_KEY")));

    let bad_url = BabelNetClient::builder("key")
        .base_url("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(bad_url, BabelNetError::UrlError(_)));
    assert_eq!(setup_hint(&bad_url), None);
}
