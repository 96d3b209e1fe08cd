//! HexaStore CLI - load an N-Triples data file, evaluate star queries against
//! the in-memory store, and optionally cross-check every result set against
//! Oxigraph.
//!
//! Usage:
//!   hexastore --data data/sample.nt --queries data/workload.queryset
//!   hexastore --data data/sample.nt --queries data/workload.queryset --verify
//!   hexastore --data data/sample.nt --queries data/workload.queryset --project --json

use clap::Parser;
use hexastore::parsing::star_query_parser::StarQueryParser;
use hexastore::querying::verification::Verification;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "hexastore")]
#[command(about = "In-memory RDF HexaStore - evaluate star queries over an N-Triples file")]
struct Args {
    /// N-Triples data file
    #[arg(short, long)]
    data: PathBuf,

    /// Star-query file (one or more SPARQL SELECT queries)
    #[arg(short, long)]
    queries: PathBuf,

    /// Cross-check every result set against Oxigraph
    #[arg(long)]
    verify: bool,

    /// Project bindings down to each query's declared answer variables
    #[arg(long)]
    project: bool,

    /// Print bindings as JSON objects instead of substitution notation
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut verification = Verification::new();
    let load_start = Instant::now();
    verification.load_data(&args.data)?;
    println!(
        "Loaded {} facts in {:.3} ms",
        verification.store().size(),
        load_start.elapsed().as_secs_f64() * 1000.0
    );

    let parser = StarQueryParser::new()?;
    let queries = parser.parse_file(&args.queries)?;
    println!("Parsed {} star quer{}", queries.len(), if queries.len() == 1 { "y" } else { "ies" });

    for query in &queries {
        let start = Instant::now();
        let results = verification.evaluate_hexastore(query);
        let elapsed = start.elapsed();
        println!(
            "\n{}: {} result(s) in {:.3} ms",
            query.name,
            results.len(),
            elapsed.as_secs_f64() * 1000.0
        );

        for binding in &results {
            let binding = if args.project {
                binding.project(&query.answer_variables)
            } else {
                binding.clone()
            };
            if args.json {
                println!("{}", serde_json::to_string(&binding)?);
            } else {
                println!("{}", binding);
            }
        }

        if args.verify {
            let correct = verification.verify(query)?;
            println!("Verified against Oxigraph: {}", if correct { "OK" } else { "MISMATCH" });
        }
    }

    Ok(())
}
