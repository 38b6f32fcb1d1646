use log::debug;

use crate::error::Result;
use crate::loss::LossType;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;

/// Full-batch training loop with every step spelled out: forward, loss,
/// backward, optimizer step, zero_grad. No shuffling.
pub fn train_manual(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    optimizer: &mut dyn Optimizer,
    loss: LossType,
    epochs: usize,
) -> Result<()> {
    let log_every = (epochs / 10).max(1);
    network.zero_grad();

    for epoch in 0..epochs {
        let yhat = network.forward(inputs)?;

        if epoch % log_every == 0 {
            debug!("epoch {epoch}: loss = {:.6}", loss.loss(&yhat, targets));
        }

        network.backward(&loss.derivative(&yhat, targets))?;
        optimizer.step(&mut network.layers);
        network.zero_grad();
    }

    Ok(())
}
