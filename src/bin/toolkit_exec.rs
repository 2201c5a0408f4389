//! Toolkit dispatcher.
//!
//! Forwards to the native toolkit's classifiers and feature-scoring
//! measures by name. Where a dynamic toolkit would evaluate the name at
//! runtime, this dispatcher resolves it through an explicit registry.
//!
//! Usage:
//!   toolkit_exec rank-features <measure> <data_path> <output_path>
//!   toolkit_exec train-test <learner> <train_path> <test_path> \
//!                <predictions_path> <probabilities_path>

use std::path::Path;

use anyhow::{bail, Result};

use tablearn::toolkit::{self, LEARNER_NAMES, MEASURE_NAMES};
use tablearn::logging;

const USAGE: &str = "\
usage:
  toolkit_exec rank-features <measure> <data_path> <output_path>
  toolkit_exec train-test <learner> <train_path> <test_path> <predictions_path> <probabilities_path>";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!("either rank-features or train-test must be specified\n{USAGE}");
    };

    match command.as_str() {
        "rank-features" => {
            let [measure, data, output] = rest else {
                bail!("rank-features takes a measure ({MEASURE_NAMES:?}) and two paths\n{USAGE}");
            };
            toolkit::rank_features(measure, Path::new(data), Path::new(output))?;
        }
        "train-test" => {
            let [learner, train, test, predictions, probabilities] = rest else {
                bail!("train-test takes a learner ({LEARNER_NAMES:?}) and four paths\n{USAGE}");
            };
            toolkit::train_test(
                learner,
                Path::new(train),
                Path::new(test),
                Path::new(predictions),
                Path::new(probabilities),
            )?;
        }
        other => {
            bail!("unknown command {other:?}: either rank-features or train-test must be specified\n{USAGE}");
        }
    }
    Ok(())
}
