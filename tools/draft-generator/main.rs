use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate deliberately messy workflow drafts for exercising
/// the seiri normalizer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_draft.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// The number of edges to generate (including broken ones)
    #[arg(long, default_value_t = 10)]
    edges: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a messy draft ({} node(s), {} edge(s))...",
        cli.nodes, cli.edges
    );

    let nodes = generate_nodes(&mut rng, cli.nodes);
    let edges = generate_edges(&mut rng, &nodes, cli.edges);

    let draft = json!({
        "schema_version": 2,
        "type": "generated",
        "nodes": nodes,
        "entry_nodes": ["missing_entry"],
        "execution": { "max_parallelism": rng.random_range(-5i64..200), "on_node_failure": "explode" },
        "edges": edges,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&draft)?)?;
    println!("Successfully generated and saved draft to '{}'", cli.output);

    Ok(())
}

/// Generates nodes with a mix of clean, duplicated, blank, and illegal ids.
fn generate_nodes(rng: &mut ThreadRng, count: usize) -> Vec<Value> {
    let node_types = [
        "ai.extract",
        "ai.classify",
        "human.review",
        "human.approval",
        "doc.split",
    ];

    (0..count)
        .map(|index| {
            let node_type = node_types[rng.random_range(0..node_types.len())];
            let id: Value = match rng.random_range(0..4) {
                0 => json!(format!("step {}!", index)), // illegal characters
                1 => json!("review"),                   // deliberate duplicate
                2 => json!(""),                         // blank, forces a fallback
                _ => json!(format!("node_{}", index)),
            };
            json!({
                "id": id,
                "nodeType": node_type,
                "metadata": { "ui": { "x": rng.random_range(0.0..800.0), "y": rng.random_range(0.0..600.0) } },
            })
        })
        .collect()
}

/// Generates edges, some valid, some dangling, and some self-loops.
fn generate_edges(rng: &mut ThreadRng, nodes: &[Value], count: usize) -> Vec<Value> {
    let ids: Vec<String> = nodes
        .iter()
        .filter_map(|n| n.get("id").and_then(Value::as_str))
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|index| {
            let from = ids[rng.random_range(0..ids.len())].clone();
            let to = match rng.random_range(0..4) {
                0 => from.clone(),                 // self-loop, should be dropped
                1 => "ghost_node".to_string(),     // dangling, should be dropped
                _ => ids[rng.random_range(0..ids.len())].clone(),
            };
            json!({
                "id": format!("edge_{}", index),
                "from": from,
                "to": to,
                "when": random_condition(rng),
            })
        })
        .collect()
}

fn random_condition(rng: &mut ThreadRng) -> Value {
    match rng.random_range(0..4) {
        0 => json!({ "type": "always" }),
        1 => json!({ "type": "route", "equals": "approved" }),
        2 => json!({ "type": "status", "in": ["completed", "skipped"] }),
        _ => json!({ "type": "nonsense", "payload": 42 }), // should degrade to always
    }
}
