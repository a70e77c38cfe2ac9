//! TreeFlow CLI — drive the engine from graph snapshot files.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use treeflow::animator::Animator;
use treeflow::config::EngineConfig;
use treeflow::error::Result;
use treeflow::graph::derive::{derive, find_root, GraphIssue};
use treeflow::graph::store::GraphStore;
use treeflow::graph::traversal::visit_sequence;
use treeflow::observability::init_logging;
use treeflow::types::{TraversalOrder, TreeGraph};

#[derive(Parser)]
#[command(name = "treeflow", version, about = "Binary-tree derivation and traversal animation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the visit sequence for a traversal order.
    Traverse {
        /// Graph snapshot JSON file ({"nodes": [...], "edges": [...]}).
        graph: PathBuf,
        #[arg(short, long, value_parser = parse_order)]
        order: TraversalOrder,
    },
    /// Play the traversal, printing each highlight step as it fires.
    Animate {
        graph: PathBuf,
        #[arg(short, long, value_parser = parse_order)]
        order: TraversalOrder,
        /// Milliseconds between steps (overrides config file).
        #[arg(long)]
        step_ms: Option<u64>,
        /// Optional YAML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the derived root, adjacency, and any structural issues.
    Check { graph: PathBuf },
}

fn parse_order(s: &str) -> std::result::Result<TraversalOrder, String> {
    TraversalOrder::from_str_loose(s)
        .ok_or_else(|| format!("unknown order {s:?} (expected pre-order, in-order or post-order)"))
}

fn load_graph(path: &Path) -> Result<TreeGraph> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn label_of<'a>(graph: &'a TreeGraph, id: &str) -> &'a str {
    graph.node(id).map(|n| n.label.as_str()).unwrap_or("?")
}

fn run_traverse(path: &Path, order: TraversalOrder) -> Result<()> {
    let graph = load_graph(path)?;
    let derivation = derive(&graph);
    let Some(root) = find_root(&graph) else {
        println!("(empty graph)");
        return Ok(());
    };
    if derivation.issues.contains(&GraphIssue::Cycle) {
        println!("graph contains a cycle; run `treeflow check` for details");
        return Ok(());
    }
    let sequence = visit_sequence(order, &root, &derivation.adjacency);
    println!("{order} traversal ({} nodes):", sequence.len());
    for id in &sequence {
        println!("  {id}  {}", label_of(&graph, id));
    }
    Ok(())
}

async fn run_animate(
    path: &Path,
    order: TraversalOrder,
    step_ms: Option<u64>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = match config_path {
        Some(p) => EngineConfig::load(p)?,
        None => EngineConfig::default(),
    };
    if let Some(ms) = step_ms {
        config.step_ms = ms;
    }

    let graph = load_graph(path)?;
    let store = GraphStore::with_graph(graph.clone());
    let animator = Animator::new(store, config);
    let mut rx = animator.subscribe();

    let mut playback = animator.spawn(order);
    loop {
        tokio::select! {
            res = &mut playback => {
                res.map_err(|e| std::io::Error::other(e.to_string()))?;
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                match &*rx.borrow_and_update() {
                    Some(id) => println!("→ {id}  {}", label_of(&graph, id)),
                    None => println!("(clear)"),
                }
            }
        }
    }
    // The final clear can land in the same tick the task finishes.
    if rx.has_changed().unwrap_or(false) && rx.borrow_and_update().is_none() {
        println!("(clear)");
    }

    println!("{}", animator.metrics().to_json());
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let graph = load_graph(path)?;
    let derivation = derive(&graph);

    match find_root(&graph) {
        Some(root) => println!("root: {root}"),
        None => println!("root: (none, empty graph)"),
    }

    let mut rows: Vec<_> = derivation.adjacency.iter().collect();
    rows.sort_by_key(|(id, _)| id.to_string());
    for (id, entry) in rows {
        println!(
            "  {id} ({}) left={} right={}",
            entry.label,
            entry.left.as_deref().unwrap_or("-"),
            entry.right.as_deref().unwrap_or("-"),
        );
    }

    if derivation.is_clean() {
        println!("structure: ok");
    } else {
        println!("structure: {:?}", derivation.issues);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Traverse { graph, order } => run_traverse(&graph, order),
        Command::Animate {
            graph,
            order,
            step_ms,
            config,
        } => run_animate(&graph, order, step_ms, config.as_deref()).await,
        Command::Check { graph } => run_check(&graph),
    }
}
