use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;
use crate::train::epoch_stats::{EpochStats, History};
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` epochs and returns the per-epoch
/// history.
///
/// Every mini-batch runs zero_grad → forward → loss → backward → step, so the
/// optimizer sees the gradient of the batch-mean loss.
///
/// # Errors
/// - `InvalidConfig` if `config` does not validate
/// - `EmptyData` if there are no samples
/// - `ShapeMismatch` if `inputs` and `targets` disagree on row count, or the
///   targets are not as wide as the network output
/// - `InputSizeMismatch` if the inputs are not as wide as the network input
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    optimizer: &mut dyn Optimizer,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<History> {
    config.validate()?;
    if inputs.is_empty() {
        return Err(NnError::EmptyData);
    }
    if inputs.rows != targets.rows || targets.cols != network.output_size() {
        return Err(NnError::ShapeMismatch {
            op: "train_loop",
            left: inputs.shape(),
            right: targets.shape(),
        });
    }
    if inputs.cols != network.input_size() {
        return Err(NnError::InputSizeMismatch { expected: network.input_size(), actual: inputs.cols });
    }

    let n = inputs.rows;
    let batch_size = config.batch_size.unwrap_or(n).min(n);
    let mut indices: Vec<usize> = (0..n).collect();
    let mut history = History { epochs: Vec::with_capacity(config.epochs) };

    for epoch in 1..=config.epochs {
        if config.shuffle {
            indices.shuffle(rng);
        }

        let mut total_loss = 0.0;
        let mut correct = 0usize;

        for batch in indices.chunks(batch_size) {
            let (x, y) = if batch.len() == n && !config.shuffle {
                (inputs.clone(), targets.clone())
            } else {
                (inputs.select_rows(batch), targets.select_rows(batch))
            };

            network.zero_grad();
            let output = network.forward(&x)?;
            total_loss += config.loss.loss(&output, &y) * batch.len() as f64;
            correct += count_correct(&output, &y);
            network.backward(&config.loss.derivative(&output, &y))?;
            optimizer.step(&mut network.layers);
        }

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss: total_loss / n as f64,
            accuracy: correct as f64 / targets.len() as f64,
        };

        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs) {
            debug!(
                "epoch {}/{}: loss = {:.6}, accuracy = {:.2}",
                stats.epoch, stats.total_epochs, stats.loss, stats.accuracy
            );
        }

        history.epochs.push(stats);
    }

    Ok(history)
}

/// Number of outputs on the same side of 0.5 as their target.
fn count_correct(output: &Matrix, targets: &Matrix) -> usize {
    output.data.iter().flatten()
        .zip(targets.data.iter().flatten())
        .filter(|(p, y)| (**p >= 0.5) == (**y >= 0.5))
        .count()
}
