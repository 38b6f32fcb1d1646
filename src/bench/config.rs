use serde::{Serialize, Deserialize};

use crate::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::Initializer;
use crate::loss::LossType;
use crate::network::{LayerSpec, NetworkSpec};
use crate::optim::OptimizerType;
use crate::train::TrainConfig;

/// How the training loop is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStyle {
    /// Declarative: hand the whole run to `train_loop`.
    Fit,
    /// Imperative: forward, loss, backward, step and zero_grad written out per epoch.
    Manual,
}

/// One XOR benchmark run: model definition, optimizer and training budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub network: NetworkSpec,
    pub optimizer: OptimizerType,
    pub epochs: usize,
    /// Mini-batch size for `TrainStyle::Fit`; `None` means full batch.
    #[serde(default)]
    pub batch_size: Option<usize>,
    pub style: TrainStyle,
    /// Fixed RNG seed; `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Keras-style run: Dense(3, sigmoid) → Dense(1, sigmoid), binary
    /// cross-entropy, RMSprop(0.001), `fit` for 5000 epochs.
    pub fn sequential() -> Self {
        BenchConfig {
            name: "sequential".to_string(),
            description: "Declarative Dense/Dense model trained with fit()".to_string(),
            network: NetworkSpec {
                name: "xor_sequential".to_string(),
                input_size: 2,
                layers: vec![
                    LayerSpec::new(3, ActivationFunction::Sigmoid, Initializer::GlorotUniform),
                    LayerSpec::new(1, ActivationFunction::Sigmoid, Initializer::GlorotUniform),
                ],
                loss: LossType::BinaryCrossEntropy,
            },
            optimizer: OptimizerType::rms_prop(0.001),
            epochs: 5000,
            batch_size: Some(32),
            style: TrainStyle::Fit,
            seed: None,
        }
    }

    /// PyTorch-style run: Linear(2) → Sigmoid → Linear(1), mean squared
    /// error, Adam(0.03), explicit loop for 10000 epochs.
    pub fn module() -> Self {
        BenchConfig {
            name: "module".to_string(),
            description: "Linear/Sigmoid/Linear module trained with an explicit step loop".to_string(),
            network: NetworkSpec {
                name: "xor_module".to_string(),
                input_size: 2,
                layers: vec![
                    LayerSpec::new(2, ActivationFunction::Sigmoid, Initializer::FanInUniform),
                    LayerSpec::new(1, ActivationFunction::Identity, Initializer::FanInUniform),
                ],
                loss: LossType::Mse,
            },
            optimizer: OptimizerType::adam(0.03),
            epochs: 10000,
            batch_size: None,
            style: TrainStyle::Manual,
            seed: None,
        }
    }

    pub fn presets() -> Vec<BenchConfig> {
        vec![BenchConfig::sequential(), BenchConfig::module()]
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Training settings handed to `train_loop` for `TrainStyle::Fit` runs.
    pub fn train_config(&self) -> TrainConfig {
        let config = TrainConfig::new(self.epochs, self.network.loss)
            .with_log_every((self.epochs / 10).max(1));
        match self.batch_size {
            Some(size) => config.with_batch_size(size),
            None => config,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NnError::invalid_config("name", "must not be empty"));
        }
        self.network.validate()?;
        if self.network.input_size != 2 {
            return Err(NnError::invalid_config("network.input_size", "XOR takes exactly 2 inputs"));
        }
        if self.network.output_size() != 1 {
            return Err(NnError::invalid_config("network.layers", "the last layer must have exactly 1 unit"));
        }
        self.optimizer.validate()?;
        self.train_config().validate()
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<BenchConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: BenchConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for preset in BenchConfig::presets() {
            preset.validate().unwrap();
        }
    }

    #[test]
    fn presets_match_the_two_framework_styles() {
        let seq = BenchConfig::sequential();
        assert_eq!(seq.style, TrainStyle::Fit);
        assert_eq!(seq.network.layers[0].size, 3);
        assert_eq!(seq.network.loss, LossType::BinaryCrossEntropy);
        assert_eq!(seq.epochs, 5000);

        let module = BenchConfig::module();
        assert_eq!(module.style, TrainStyle::Manual);
        assert_eq!(module.network.layers[1].activation, ActivationFunction::Identity);
        assert_eq!(module.optimizer, OptimizerType::adam(0.03));
        assert_eq!(module.epochs, 10000);
    }

    #[test]
    fn rejects_wrong_output_width() {
        let mut cfg = BenchConfig::module();
        cfg.network.layers[1].size = 2;
        assert!(matches!(cfg.validate(), Err(NnError::InvalidConfig { .. })));
        assert!(BenchConfig::module().with_epochs(0).validate().is_err());
    }
}
