use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::loss::loss_type::LossType;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`     — total number of full passes over the training data
/// - `batch_size` — samples per mini-batch; `None` trains on the full batch
/// - `loss`       — which loss function to minimize
/// - `shuffle`    — reshuffle sample order at the start of every epoch
/// - `log_every`  — emit a `debug!` progress line every N epochs (0 disables)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    #[serde(default)]
    pub batch_size: Option<usize>,
    pub loss: LossType,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    #[serde(default)]
    pub log_every: usize,
}

fn default_shuffle() -> bool {
    true
}

impl TrainConfig {
    /// Full-batch training with shuffling on and progress logging off.
    pub fn new(epochs: usize, loss: LossType) -> Self {
        TrainConfig {
            epochs,
            batch_size: None,
            loss,
            shuffle: true,
            log_every: 0,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NnError::invalid_config("epochs", "must be greater than 0"));
        }
        if self.batch_size == Some(0) {
            return Err(NnError::invalid_config("batch_size", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_epochs_and_empty_batches() {
        assert!(TrainConfig::new(0, LossType::Mse).validate().is_err());
        assert!(TrainConfig::new(5, LossType::Mse).with_batch_size(0).validate().is_err());
        assert!(TrainConfig::new(5, LossType::Mse).with_batch_size(2).validate().is_ok());
    }

    #[test]
    fn optional_fields_default_from_json() {
        let cfg: TrainConfig = serde_json::from_str(r#"{ "epochs": 10, "loss": "mse" }"#).unwrap();
        assert_eq!(cfg, TrainConfig::new(10, LossType::Mse));
    }
}
