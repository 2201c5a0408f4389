//! Attribute-format feature ranker.
//!
//! Reads an ARFF-style attribute-declaration file, shuffles the attribute
//! names with a seeded RNG (the class attribute excluded), and writes the
//! "ranking" as a newline-delimited list. A demonstration stub showing the
//! ranking contract: replace the shuffle with a real ranker.
//!
//! Usage:
//!   arff_rank <input_path> <seed> <output_path>

use std::path::Path;

use anyhow::{bail, Context, Result};

use tablearn::data::arff;
use tablearn::{logging, rank};

const USAGE: &str = "usage: arff_rank <input_path> <seed> <output_path>";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, seed, output] = args.as_slice() else {
        bail!("{USAGE}");
    };
    let seed: u64 = seed
        .parse()
        .with_context(|| format!("seed must be a non-negative integer, got {seed:?}"))?;

    let features = arff::read_feature_list(Path::new(input))?;
    let ranked = rank::shuffle_ranking(features, seed);
    rank::write_ranking(Path::new(output), &ranked)
        .with_context(|| format!("failed to write {output}"))?;
    Ok(())
}
