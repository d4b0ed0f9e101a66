//! Basic example demonstrating the BabelNet API client.
//!
//! Run with:
//! ```
//! BABELNET_API_KEY=your-key cargo run --example basic
//! ```

use babelnet::{BabelNetClient, WordQuery};

#[tokio::main]
async fn main() -> babelnet::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating BabelNet client...");
    let client = BabelNetClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    let version = client.get_version().await?;
    println!("BabelNet version: {}", version.as_deref().unwrap_or("unknown"));

    // Look up the concepts denoted by a word
    println!("\n--- Synsets for \"dog\" (EN) ---");
    let query = WordQuery::new("dog").with_lang("EN");
    let ids = client.get_synset_ids(&query).await?;
    for id in ids.iter().take(5) {
        println!("  {id}");
    }

    // Fetch the first synset with its English and Italian lexicalizations
    if let Some(id) = ids.first() {
        println!("\n--- Synset {id} ---");
        let synset = client.get_synset_by_id(id, Some("EN,IT")).await?;
        println!("Lemmas: {}", synset.lemmas().join(", "));
        if let Some(gloss) = synset.gloss_in("EN") {
            println!("Gloss: {gloss}");
        }

        // Walk the outgoing relations
        println!("\n--- Edges ---");
        let edges = client.get_edges(id).await?;
        for edge in edges.iter().take(10) {
            println!("  {} -> {}", edge.relation(), edge.target);
        }
        if edges.len() > 10 {
            println!("  ... and {} more", edges.len() - 10);
        }
    }

    Ok(())
}
