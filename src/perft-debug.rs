use std::env;

use anyhow::{bail, Context};
use chess_rules::utils::{perft_divide, PerftResult};
use chess_rules::{Board, Color};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().collect();
    let depth: usize = args
        .get(1)
        .context("usage: perft-debug <depth> [expected]")?
        .parse::<usize>()
        .context("depth must be a number")?;
    if depth == 0 {
        bail!("depth must be at least 1");
    }
    let expected: Option<usize> = args
        .get(2)
        .map(|arg| arg.parse::<usize>())
        .transpose()
        .context("expected must be a node count")?;

    info!("perft from the starting position, depth {depth}");
    let board = Board::default();
    let mut total = PerftResult::default();
    for (start, end, result) in perft_divide(&board, Color::White, depth)? {
        println!(" {start} -> {end} : {result}");
        total += result;
    }
    println!("+ total: {total}");

    if let Some(expected) = expected {
        if total.all != expected {
            bail!("Found {} moves, expected {expected}.", total.all);
        }
    }
    Ok(())
}
