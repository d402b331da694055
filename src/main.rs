// src/main.rs

use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;

use rookery::game::io::{position_from_fen, START_FEN};
use rookery::perft::{divide, perft};

#[derive(Parser, Debug)]
#[command(author, version, about = "Walk the legal move tree of a position", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,
    #[arg(short, long, default_value_t = 5)]
    depth: u32,
    /// Print per-root-move subtotals at the final depth
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<()> {
    rookery::init();
    let args = Args::parse();

    let mut pos = position_from_fen(&args.fen).map_err(|e| anyhow!(e))?;
    println!("{pos}");

    if args.divide {
        let mut total = 0u64;
        for (m, nodes) in divide(&mut pos, args.depth.max(1)) {
            println!("{m}: {nodes}");
            total += nodes;
        }
        println!("\nNodes searched: {}", format_with_commas(total));
        return Ok(());
    }

    println!("Depth\tNodes\t\tTime\tMnps");
    for d in 0..=args.depth {
        let start = Instant::now();
        let nodes = perft(&mut pos, d);
        let elapsed = start.elapsed();
        let mnps = nodes as f64 / elapsed.as_micros().max(1) as f64;
        println!(
            "{d}\t{}\t{:.0} ms\t{:.2}",
            format_with_commas(nodes),
            elapsed.as_millis(),
            mnps
        );
    }
    Ok(())
}

fn format_with_commas(n: u64) -> String {
    let mut s = n.to_string();
    let mut i = s.len() as isize - 3;
    while i > 0 {
        s.insert(i as usize, ',');
        i -= 3;
    }
    s
}
