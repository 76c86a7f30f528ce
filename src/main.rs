//! Makai Suggest - Main entrypoint.
//!
//! CLI harness around the suggestion engine: loads a vocabulary file and a
//! prefix file, runs each prefix through one strategy (or all of them), and
//! prints the suggestions so strategy outputs can be eyeballed side by
//! side.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use makai_suggest_lib::engine::{QueryStrategy, SuggestionEngine};
use makai_suggest_lib::error::MakaiResult;
use makai_suggest_lib::loader;

/// Command line arguments for Makai Suggest.
#[derive(Parser, Debug)]
#[clap(name = "Makai Suggest", version, author, about)]
struct Args {
    /// Path to the JSON vocabulary file ({"words": [...]})
    #[clap(short, long, value_parser)]
    words: PathBuf,

    /// Path to the JSON prefix file ({"prefixes": [{"prefix": ...}]})
    #[clap(short, long, value_parser)]
    prefixes: PathBuf,

    /// Query strategy to run; omit to run and compare all of them
    #[clap(short, long, value_enum)]
    strategy: Option<QueryStrategy>,

    /// Ingest at most this many words from the vocabulary file
    #[clap(short, long)]
    limit: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> MakaiResult<()> {
    let words = match args.limit {
        Some(limit) => loader::load_words_capped(&args.words, limit)?,
        None => loader::load_words(&args.words)?,
    };

    let mut engine = SuggestionEngine::new();
    for word in &words {
        engine.ingest(word);
    }
    info!(
        ingested = engine.word_count(),
        supplied = words.len(),
        "engine ready"
    );

    let prefixes = loader::load_prefixes(&args.prefixes)?;
    for record in &prefixes {
        println!("\nprefix: '{}'", record.prefix);
        match args.strategy {
            Some(strategy) => {
                let suggestions = engine.query(strategy, &record.prefix);
                println!("  {:<22} {}", strategy.label(), suggestions.join(", "));
            }
            None => compare_all(&engine, &record.prefix),
        }
    }

    Ok(())
}

/// Runs every strategy for one prefix and reports whether the outputs that
/// are supposed to agree actually do: the four depth-first traversals with
/// the sorted list, and the four breadth-first traversals with each other.
/// The prefix map is shown but not reconciled; its arrival order is its
/// own contract.
fn compare_all(engine: &SuggestionEngine, prefix: &str) {
    for strategy in QueryStrategy::ALL {
        let suggestions = engine.query(strategy, prefix);
        println!("  {:<22} {}", strategy.label(), suggestions.join(", "));
    }

    let sorted = engine.query(QueryStrategy::SortedList, prefix);
    let dfs_agree = QueryStrategy::TRIE
        .iter()
        .filter(|s| s.returns_sorted_output())
        .all(|&s| engine.query(s, prefix) == sorted);

    let bfs_reference = engine.query(QueryStrategy::IterativeBfsConcat, prefix);
    let bfs_agree = QueryStrategy::TRIE
        .iter()
        .filter(|s| !s.returns_sorted_output())
        .all(|&s| engine.query(s, prefix) == bfs_reference);

    println!("  dfs+sorted agree: {dfs_agree}, bfs agree: {bfs_agree}");
}
