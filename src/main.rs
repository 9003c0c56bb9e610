use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bst_layout::construction::Session;
use bst_layout::layout::{Layout, BASE_SPAN, VERTICAL_SPACING};

/// Keys inserted when none are given.
const DEFAULT_KEYS: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

#[derive(Parser, Debug)]
#[command(
    name = "bst-layout",
    about = "Build a binary search tree and print the events that animate it",
    allow_negative_numbers = true
)]
struct Cli {
    /// Keys to insert, in order.
    keys: Vec<i64>,
    /// Horizontal offset of the root's children; halves at each level.
    #[arg(long, default_value_t = BASE_SPAN)]
    base_span: f64,
    /// Downward step between a parent and its children.
    #[arg(long, default_value_t = VERTICAL_SPACING)]
    vertical_spacing: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(Cli::parse(), BufWriter::new(io::stdout().lock()))
}

/// Builds the tree described by `cli` and writes one event per line to `out`.
fn run(cli: Cli, mut out: impl Write) -> Result<()> {
    let layout =
        Layout::new(cli.base_span, cli.vertical_spacing).context("invalid layout constants")?;
    let keys = if cli.keys.is_empty() {
        DEFAULT_KEYS.to_vec()
    } else {
        cli.keys
    };
    info!(keys = keys.len(), "building tree");

    let mut events = Vec::new();
    let mut session = Session::new(layout, &mut events);
    for key in keys {
        session.insert(key);
    }
    let (tree, _) = session.finish();
    info!(nodes = tree.len(), height = tree.height(), "tree built");

    for event in &events {
        writeln!(out, "{event}").context("failed to write event")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}
