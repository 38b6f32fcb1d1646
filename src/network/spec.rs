use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::init::Initializer;
use crate::loss::loss_type::LossType;

/// Describes one dense layer in a network specification.
///
/// The layer's input size is implied by the previous layer (or by
/// `NetworkSpec::input_size` for the first one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: ActivationFunction,
    #[serde(default)]
    pub initializer: Initializer,
}

impl LayerSpec {
    pub fn new(size: usize, activation: ActivationFunction, initializer: Initializer) -> Self {
        LayerSpec { size, activation, initializer }
    }
}

/// A fully serializable description of a network architecture plus the loss
/// it is trained against.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of the
/// trained weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used in reports.
    pub name: String,
    /// Number of features per input sample.
    pub input_size: usize,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Loss function to pair with this network during training.
    pub loss: LossType,
}

impl NetworkSpec {
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(NnError::invalid_config("network.input_size", "must be greater than 0"));
        }
        if self.layers.is_empty() {
            return Err(NnError::invalid_config("network.layers", "at least one layer is required"));
        }
        if let Some(i) = self.layers.iter().position(|l| l.size == 0) {
            return Err(NnError::invalid_config(
                &format!("network.layers[{i}].size"),
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializer_defaults_when_missing_from_json() {
        let json = r#"{
            "name": "xor",
            "input_size": 2,
            "layers": [{ "size": 1, "activation": "Sigmoid" }],
            "loss": "mse"
        }"#;
        let spec: NetworkSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.layers[0].initializer, Initializer::GlorotUniform);
        assert_eq!(spec.output_size(), 1);
    }

    #[test]
    fn validate_names_the_bad_field() {
        let spec = NetworkSpec {
            name: "bad".into(),
            input_size: 2,
            layers: vec![LayerSpec::new(0, ActivationFunction::Sigmoid, Initializer::Uniform)],
            loss: LossType::Mse,
        };
        match spec.validate() {
            Err(NnError::InvalidConfig { field, .. }) => assert_eq!(field, "network.layers[0].size"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
