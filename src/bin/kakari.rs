//! Command-line interface for kakari.
//!
//! Usage:
//!   kakari analyze `<corpus>` [--keywords `<file>`] [--config `<file>`]  - Analyze a corpus and write keyword artifacts
//!   kakari inspect `<file>`                                          - Parse one document and print its phrase forest

use clap::{Arg, ArgMatches, Command};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

use kakari::chunking::chunk_tokens;
use kakari::config::{KakariConfig, Loader};
use kakari::corpus::cache::TokenCache;
use kakari::corpus::curated::load_curated_keywords;
use kakari::corpus::tokenizer::{ScriptTokenizer, Tokenizer};
use kakari::corpus::{CorpusFile, DirectorySource};
use kakari::parsing::parse;
use kakari::parsing::treeviz::render_forest;
use kakari::pipeline::artifacts::OutputFormat;
use kakari::pipeline::Analyzer;
use kakari::tagging::classify;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let matches = Command::new("kakari")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keyword phrase extraction for tagged text corpora")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("analyze")
                .about("Analyze a corpus directory and write keyword artifacts")
                .arg(
                    Arg::new("corpus")
                        .help("Path to the corpus directory")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("keywords")
                        .long("keywords")
                        .short('k')
                        .help("Curated keyword JSON file"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("cache")
                        .long("cache")
                        .help("Token cache file (overrides configuration)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output directory (overrides configuration)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'yaml')"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a single document and print its phrase forest")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("analyze", analyze_matches)) => handle_analyze(analyze_matches),
        Some(("inspect", inspect_matches)) => handle_inspect(inspect_matches),
        _ => unreachable!(),
    }
}

/// Handle the analyze command
fn handle_analyze(matches: &ArgMatches) {
    let corpus_dir = matches.get_one::<String>("corpus").unwrap();
    let config = load_config(matches);

    let source = DirectorySource::new(corpus_dir, config.corpus.extension.as_str());
    let files = source.load_files().unwrap_or_else(|error| fail(error));
    tracing::info!(documents = files.len(), corpus = %corpus_dir, "corpus loaded");

    let cache_path = matches
        .get_one::<String>("cache")
        .cloned()
        .unwrap_or_else(|| config.tokenizer.cache_file.clone());
    let mut cache = TokenCache::load(Path::new(&cache_path));
    let tokenizer = ScriptTokenizer::new();

    let mut documents = Vec::new();
    let mut tokens_by_document = BTreeMap::new();
    for CorpusFile {
        document,
        modified_secs,
    } in files
    {
        let tokens = match cache.lookup(&document.id, modified_secs) {
            Some(tokens) => tokens.to_vec(),
            None => {
                tracing::debug!(document = %document.id, "tokenizing");
                let tokens = tokenizer
                    .tokenize(&document.content)
                    .unwrap_or_else(|error| fail(error));
                cache.store(document.id.clone(), modified_secs, tokens.clone());
                tokens
            }
        };
        tokens_by_document.insert(document.id.clone(), tokens);
        documents.push(document);
    }
    if cache.is_dirty() {
        tracing::info!(entries = cache.len(), path = %cache_path, "saving token cache");
    }
    cache
        .save(Path::new(&cache_path))
        .unwrap_or_else(|error| fail(error));

    let curated = matches
        .get_one::<String>("keywords")
        .map(|path| load_curated_keywords(Path::new(path)))
        .unwrap_or_default();

    let analyzer = Analyzer::from_config(&config);
    let artifacts = analyzer
        .analyze(&documents, &tokens_by_document, &curated)
        .unwrap_or_else(|error| fail(error));

    let format_name = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    let Some(format) = OutputFormat::from_name(&format_name) else {
        fail(format!("unknown output format '{}'", format_name))
    };
    let out_dir = matches
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| config.output.directory.clone());
    let written = artifacts
        .write_to_dir(Path::new(&out_dir), format)
        .unwrap_or_else(|error| fail(error));

    tracing::info!(keywords = artifacts.keyword_to_documents.len(), "analysis complete");
    for path in written {
        println!("{}", path.display());
    }
}

/// Handle the inspect command
fn handle_inspect(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let raw = std::fs::read_to_string(path).unwrap_or_else(|error| fail(error));

    let tagged = ScriptTokenizer::new()
        .tokenize(&raw)
        .unwrap_or_else(|error| fail(error));
    let tokens: Vec<_> = tagged.iter().map(classify).collect();
    let base = chunk_tokens(&tokens);
    println!("{} tokens, {} base chunks", tokens.len(), base.len());

    let outcome = parse(base);
    if !outcome.complete {
        println!("(partial parse: {} top-level chunks)", outcome.forest.len());
    }
    print!("{}", render_forest(&outcome.forest));
}

fn load_config(matches: &ArgMatches) -> KakariConfig {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("kakari.toml"),
    };
    loader.build().unwrap_or_else(|error| fail(error))
}

fn fail(error: impl fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    process::exit(1);
}
