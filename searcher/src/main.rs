use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use engine::corpus::{load_document_list, load_noise_words, FsDocumentSource};
use engine::{Occurrence, SearchEngine};
use serde::Serialize;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Build an in-memory keyword index and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing the document names to index, in order
    #[arg(long)]
    docs: String,
    /// File listing the noise words to exclude
    #[arg(long)]
    noise: String,
    /// Directory containing the document files
    #[arg(long, default_value = ".")]
    root: String,
    /// Emit JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a top-5 OR query for two keywords
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        kw1: String,
        kw2: String,
    },
    /// Print one keyword's posting list in descending frequency order
    Postings {
        #[command(flatten)]
        corpus: CorpusArgs,
        keyword: String,
    },
}

#[derive(Serialize)]
struct SearchReport<'a> {
    kw1: &'a str,
    kw2: &'a str,
    matched: bool,
    results: Vec<String>,
}

#[derive(Serialize)]
struct PostingsReport<'a> {
    keyword: &'a str,
    postings: Vec<Occurrence>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, kw1, kw2 } => search(&corpus, &kw1, &kw2),
        Commands::Postings { corpus, keyword } => postings(&corpus, &keyword),
    }
}

fn build_engine(corpus: &CorpusArgs) -> Result<SearchEngine> {
    let noise_words = load_noise_words(&corpus.noise)
        .with_context(|| format!("loading noise words from {}", corpus.noise))?;
    let documents = load_document_list(&corpus.docs)
        .with_context(|| format!("loading document list from {}", corpus.docs))?;

    let mut engine = SearchEngine::new(noise_words);
    let start = Instant::now();
    engine
        .build_index(&documents, &FsDocumentSource::new(&corpus.root))
        .context("building index")?;
    tracing::info!(
        num_docs = documents.len(),
        num_keywords = engine.keyword_count(),
        took_ms = start.elapsed().as_millis() as u64,
        "index ready"
    );
    Ok(engine)
}

fn search(corpus: &CorpusArgs, kw1: &str, kw2: &str) -> Result<()> {
    let engine = build_engine(corpus)?;
    let start = Instant::now();
    let results = engine.search(kw1, kw2);
    tracing::info!(took_ms = start.elapsed().as_millis() as u64, "query complete");

    if corpus.json {
        let report = SearchReport {
            kw1,
            kw2,
            matched: results.is_some(),
            results: results.unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match results {
        Some(documents) => {
            for document in documents {
                println!("{document}");
            }
        }
        None => println!("no matching documents"),
    }
    Ok(())
}

fn postings(corpus: &CorpusArgs, keyword: &str) -> Result<()> {
    let engine = build_engine(corpus)?;
    let keyword = keyword.to_lowercase();
    let postings = engine.postings(&keyword).unwrap_or_default();

    if corpus.json {
        let report = PostingsReport {
            keyword: &keyword,
            postings: postings.to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if postings.is_empty() {
        println!("keyword not indexed: {keyword}");
    }
    for occurrence in postings {
        println!("{}\t{}", occurrence.document, occurrence.frequency);
    }
    Ok(())
}
