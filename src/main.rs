use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};

use tabdex::core::config::{Config, DEFAULT_DATASET_PATH, DEFAULT_INDEX_PATH};
use tabdex::core::logger::{Logger, StderrLogger};
use tabdex::corpus::loader::load_documents_from_path;
use tabdex::index::builder::IndexBuilder;
use tabdex::query::engine::QueryEngine;
use tabdex::storage::codec;

#[derive(Parser)]
#[command(
    name = "tabdex",
    version,
    about = "tool to build, dump, load and query inverted index"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build inverted index and save it in binary format to hard drive
    Build {
        /// Path to dataset to load
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        dataset: PathBuf,
        /// Path to store inverted index in a binary format
        #[arg(short, long, default_value = DEFAULT_INDEX_PATH)]
        output: PathBuf,
    },
    /// Query inverted index
    Query {
        /// Path to read inverted index in a binary format
        #[arg(short, long, default_value = DEFAULT_INDEX_PATH)]
        index: PathBuf,
        /// Query to run against inverted index; repeat -q for several queries
        #[arg(
            short,
            long,
            value_name = "WORD",
            num_args = 1..,
            value_parser = clap::value_parser!(String),
            action = ArgAction::Append,
            conflicts_with_all = ["query_file_utf8", "query_file_cp1251"]
        )]
        query: Vec<Vec<String>>,
        /// Query file to get queries for inverted index, UTF-8
        #[arg(long, value_name = "FILE", conflicts_with = "query_file_cp1251")]
        query_file_utf8: Option<PathBuf>,
        /// Query file to get queries for inverted index, cp1251
        #[arg(long, value_name = "FILE")]
        query_file_cp1251: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = StderrLogger;

    match cli.cmd {
        Cmd::Build { dataset, output } => build(&dataset, &output, &logger),
        Cmd::Query {
            index,
            query,
            query_file_utf8,
            query_file_cp1251,
        } => run_queries(&index, query, query_file_utf8, query_file_cp1251, &logger),
    }
}

fn build(dataset: &Path, output: &Path, logger: &dyn Logger) -> Result<()> {
    let documents = load_documents_from_path(dataset, logger)
        .with_context(|| format!("can't load dataset from {}", dataset.display()))?;

    let builder = IndexBuilder::with_workers(Config::default().workers);
    let index = builder.build_parallel(&documents, logger);

    codec::dump(&index, output, logger)
        .with_context(|| format!("can't dump index to {}", output.display()))?;
    Ok(())
}

/// Load the index once, then answer every query on its own stdout line as
/// comma-joined doc ids. Diagnostics stay on stderr.
fn run_queries(
    index_path: &Path,
    inline_queries: Vec<Vec<String>>,
    query_file_utf8: Option<PathBuf>,
    query_file_cp1251: Option<PathBuf>,
    logger: &dyn Logger,
) -> Result<()> {
    let index = codec::load(index_path, logger)
        .with_context(|| format!("can't load index from {}", index_path.display()))?;
    let engine = QueryEngine::new(&index);

    let queries = if !inline_queries.is_empty() {
        inline_queries
    } else if let Some(path) = query_file_utf8 {
        read_query_file(&path, UTF_8)?
    } else if let Some(path) = query_file_cp1251 {
        read_query_file(&path, WINDOWS_1251)?
    } else {
        read_queries_from_stdin()?
    };

    for terms in &queries {
        let doc_ids = engine.search(terms, logger);
        let line = doc_ids
            .iter()
            .map(|doc_id| doc_id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!("{}", line);
    }
    Ok(())
}

/// One query per line; words split on whitespace. Blank lines stay as empty
/// queries so output lines keep a one-to-one match with input lines.
fn read_query_file(path: &Path, encoding: &'static Encoding) -> Result<Vec<Vec<String>>> {
    let bytes =
        fs::read(path).with_context(|| format!("can't open query file {}", path.display()))?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        bail!(
            "query file {} is not valid {}",
            path.display(),
            encoding.name()
        );
    }
    Ok(text.lines().map(parse_query).collect())
}

fn read_queries_from_stdin() -> Result<Vec<Vec<String>>> {
    let mut queries = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("can't read queries from stdin")?;
        queries.push(parse_query(&line));
    }
    Ok(queries)
}

fn parse_query(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
