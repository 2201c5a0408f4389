//! Delimited-format feature ranker.
//!
//! Reads a tab-delimited transposed matrix, shuffles the feature names with
//! a seeded RNG (header and class rows excluded), and writes the "ranking"
//! as a newline-delimited list. A demonstration stub showing the ranking
//! contract: replace the shuffle with a real ranker.
//!
//! Usage:
//!   delim_rank <input_path> <seed> <output_path>

use std::path::Path;

use anyhow::{bail, Context, Result};

use tablearn::data::DelimitedMatrix;
use tablearn::{logging, rank};

const USAGE: &str = "usage: delim_rank <input_path> <seed> <output_path>";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, seed, output] = args.as_slice() else {
        bail!("{USAGE}");
    };
    let seed: u64 = seed
        .parse()
        .with_context(|| format!("seed must be a non-negative integer, got {seed:?}"))?;

    let matrix = DelimitedMatrix::read(Path::new(input))?;
    let ranked = rank::shuffle_ranking(matrix.feature_names(), seed);
    rank::write_ranking(Path::new(output), &ranked)
        .with_context(|| format!("failed to write {output}"))?;
    Ok(())
}
