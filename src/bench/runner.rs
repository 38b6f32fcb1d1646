use std::time::Instant;

use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::bench::config::{BenchConfig, TrainStyle};
use crate::bench::manual::train_manual;
use crate::bench::report::{BenchReport, Prediction, XOR_TOLERANCE};
use crate::data::xor::{XorDataset, XOR_SAMPLES};
use crate::error::Result;
use crate::network::network::Network;
use crate::train::loop_fn::train_loop;

/// Builds the dataset and model for `config`, times the training call, and
/// predicts every XOR sample with the trained model.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        "{}: {} epochs, {:?} style, seed {}",
        config.name, config.epochs, config.style, seed
    );

    let data = XorDataset::new();
    let mut network = Network::from_spec(&config.network, &mut rng)?;
    let mut optimizer = config.optimizer.build();
    let loss = config.network.loss;

    let start = Instant::now();
    let train_accuracy = match config.style {
        TrainStyle::Fit => {
            let history = train_loop(
                &mut network,
                &data.inputs,
                &data.targets,
                optimizer.as_mut(),
                &config.train_config(),
                &mut rng,
            )?;
            history.final_accuracy()
        }
        TrainStyle::Manual => {
            train_manual(&mut network, &data.inputs, &data.targets, optimizer.as_mut(), loss, config.epochs)?;
            None
        }
    };
    let elapsed = start.elapsed();

    // XorDataset rows follow XOR_SAMPLES order.
    let outputs = network.predict_batch(&data.inputs)?;
    let final_loss = loss.loss(&outputs, &data.targets);
    let predictions = XOR_SAMPLES
        .iter()
        .enumerate()
        .map(|(i, &(input, expected))| Prediction {
            input,
            output: outputs.row(i).first().copied().unwrap_or(f64::NAN),
            expected,
        })
        .collect();

    let report = BenchReport {
        name: config.name.clone(),
        style: config.style,
        epochs: config.epochs,
        seed,
        elapsed,
        final_loss,
        train_accuracy,
        predictions,
    };

    info!(
        "{}: trained in {:.3} ms, final loss {:.6}",
        report.name,
        report.elapsed_ms(),
        report.final_loss
    );
    if !report.approximates_xor(XOR_TOLERANCE) {
        warn!(
            "{}: model did not learn XOR within {} (seed {})",
            report.name, XOR_TOLERANCE, seed
        );
    }

    Ok(report)
}
