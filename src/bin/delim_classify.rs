//! Delimited-format classifier.
//!
//! Reads tab-delimited training and test matrices, shuffles the true test
//! labels with a seeded RNG, and writes them one-hot encoded as a
//! prediction table. A demonstration stub showing the classification
//! contract: replace the shuffle with a real learner. The training matrix is
//! parsed (so format errors surface) but its contents are unused, exactly as
//! a harness would hand both files to a real learner.
//!
//! Usage:
//!   delim_classify <train_path> <test_path> <seed> <output_path>

use std::path::Path;

use anyhow::{bail, Context, Result};

use tablearn::classify::shuffle::shuffled_one_hot;
use tablearn::data::DelimitedMatrix;
use tablearn::logging;

const USAGE: &str = "usage: delim_classify <train_path> <test_path> <seed> <output_path>";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [train, test, seed, output] = args.as_slice() else {
        bail!("{USAGE}");
    };
    let seed: u64 = seed
        .parse()
        .with_context(|| format!("seed must be a non-negative integer, got {seed:?}"))?;

    let _train = DelimitedMatrix::read(Path::new(train))?;
    let test = DelimitedMatrix::read(Path::new(test))?;

    let table = shuffled_one_hot(test.class_labels(), seed);
    table
        .write(Path::new(output))
        .with_context(|| format!("failed to write {output}"))?;
    Ok(())
}
