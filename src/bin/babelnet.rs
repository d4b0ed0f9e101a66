//! BabelNet API CLI binary.
//!
//! A command-line interface for querying the BabelNet HTTP API.

use babelnet::cli::{setup_hint, Cli, Command};
use babelnet::mcp::BabelNetServer;
use babelnet::output::PrettyPrint;
use babelnet::{BabelNetClient, BabelNetClientBuilder, Edge, Sense, WordQuery};
use clap::Parser;
use rmcp::ServiceExt;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = setup_hint(&e) {
                eprintln!("Hint: {hint}");
            }
            return ExitCode::FAILURE;
        }
    };

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> babelnet::Result<BabelNetClient> {
    let mut builder = BabelNetClientBuilder::from_env()?;
    for (name, value) in &cli.defaults {
        builder = builder.default_param(name, value);
    }
    if cli.insecure {
        builder = builder.accept_invalid_certs(true);
    }
    builder.build()
}

async fn run(client: BabelNetClient, cli: Cli) -> babelnet::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Version => {
            let version = client.get_version().await?;
            if json {
                println!("{}", serde_json::json!({ "version": version }));
            } else {
                println!("{}", version.as_deref().unwrap_or("unknown"));
            }
        }
        Command::SynsetIds(args) => {
            let ids = client.get_synset_ids(&WordQuery::from(args)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                for id in &ids {
                    println!("{id}");
                }
            }
        }
        Command::Synset { id, filter_langs } => {
            let synset = client
                .get_synset_by_id(&id, filter_langs.as_deref())
                .await?;
            output_single(&synset, json)?;
        }
        Command::Senses(args) => {
            let senses = client.get_senses(&WordQuery::from(args)).await?;
            output_list(&senses, json, |s| SenseRow::from(s))?;
        }
        Command::Edges { id } => {
            let edges = client.get_edges(&id).await?;
            output_list(&edges, json, |e| EdgeRow::from(e))?;
        }
        Command::Mcp => serve_mcp(client).await,
    }
    Ok(())
}

async fn serve_mcp(client: BabelNetClient) {
    let server = BabelNetServer::new(client);
    match server.serve(rmcp::transport::stdio()).await {
        Ok(service) => {
            if let Err(e) = service.waiting().await {
                tracing::error!("MCP server stopped: {e}");
            }
        }
        Err(e) => tracing::error!("Failed to start MCP server: {e}"),
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> babelnet::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> babelnet::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} result(s)", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct SenseRow {
    lemma: String,
    language: String,
    pos: String,
    source: String,
    synset: String,
}

impl From<&Sense> for SenseRow {
    fn from(s: &Sense) -> Self {
        Self {
            lemma: s.display_lemma().unwrap_or_default(),
            language: s.language.clone().unwrap_or_default(),
            pos: s.pos.clone().unwrap_or_default(),
            source: s.source.clone().unwrap_or_default(),
            synset: s.synset().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Tabled)]
struct EdgeRow {
    relation: String,
    target: String,
    language: String,
    weight: String,
}

impl From<&Edge> for EdgeRow {
    fn from(e: &Edge) -> Self {
        Self {
            relation: e.relation().to_string(),
            target: e.target.clone(),
            language: e.language.clone().unwrap_or_default(),
            weight: format!("{:.3}", e.weight),
        }
    }
}
