use clap::Parser;
use seiri::prelude::*;
use std::fs;
use std::time::Instant;

/// A CLI for normalizing builder-authored workflow drafts into save payloads
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow draft JSON file (builder export format)
    draft_path: String,

    /// Optional path to write the normalized payload JSON to (stdout otherwise)
    #[arg(short, long)]
    output: Option<String>,

    /// Optional path to write a binary snapshot of the result to
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Wire unconnected drafts into a sequential graph
    #[arg(short = 'w', long)]
    auto_wire: bool,

    /// Print every repair the normalizer applied
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let draft_json = fs::read_to_string(&cli.draft_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read draft file '{}': {}",
            &cli.draft_path, e
        ))
    });

    // --- 2. Parsing and Conversion ---
    let draft = UiDefinition::from_json(&draft_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse draft JSON: {}", e)))
        .into_draft()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert draft: {}", e)));

    let node_count = draft.nodes.len();
    let edge_count = draft.edges.len();

    // --- 3. Normalization ---
    let normalize_start = Instant::now();
    let builder = Normalizer::builder(draft);
    let builder = if cli.auto_wire {
        builder.with_auto_wire()
    } else {
        builder
    };
    let normalized = builder.build().normalize();
    let normalize_duration = normalize_start.elapsed();

    println!(
        "Normalized {} node(s) and {} edge(s) in {:?} ({} repair(s) applied)",
        node_count,
        edge_count,
        normalize_duration,
        normalized.repairs.len()
    );

    if cli.verbose {
        for repair in &normalized.repairs {
            println!("  - {}", repair);
        }
    }

    // --- 4. Output ---
    let payload_json = serde_json::to_string_pretty(&normalized.payload)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize payload: {}", e)));

    match &cli.output {
        Some(path) => {
            fs::write(path, payload_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write payload to '{}': {}", path, e))
            });
            println!("Payload written to '{}'", path);
        }
        None => println!("{}", payload_json),
    }

    if let Some(path) = &cli.snapshot {
        let snapshot = DraftSnapshot::new(normalized.payload, normalized.remap);
        snapshot
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
        println!("Snapshot written to '{}'", path);
    }

    println!("Total execution: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
