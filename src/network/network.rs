use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a freshly initialized network from its definition.
    pub fn from_spec<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;
        let mut input_size = spec.input_size;
        let mut layers = Vec::with_capacity(spec.layers.len());
        for layer in &spec.layers {
            layers.push(Layer::new(input_size, layer.size, layer.activation, layer.initializer, rng));
            input_size = layer.size;
        }
        Ok(Network { layers })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }

    /// Forward pass over a batch; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        self.check_width(input)?;
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        Ok(current)
    }

    /// Propagates ∂L/∂output back through every layer, accumulating gradients.
    pub fn backward(&mut self, grad_output: &Matrix) -> Result<()> {
        let expected = (grad_output.rows, self.output_size());
        if grad_output.cols != expected.1 {
            return Err(NnError::ShapeMismatch {
                op: "backward",
                left: grad_output.shape(),
                right: expected,
            });
        }
        let mut grad = grad_output.clone();
        for (i, layer) in self.layers.iter_mut().enumerate().rev() {
            grad = layer.backward(&grad).ok_or(NnError::NoForwardPass { layer: i })?;
        }
        Ok(())
    }

    pub fn zero_grad(&mut self) {
        for layer in &mut self.layers {
            layer.zero_grad();
        }
    }

    /// Inference over a batch of samples.
    pub fn predict_batch(&self, input: &Matrix) -> Result<Matrix> {
        self.check_width(input)?;
        Ok(self.layers.iter().fold(input.clone(), |x, layer| layer.infer(&x)))
    }

    /// Inference for a single sample.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        let out = self.predict_batch(&Matrix::row_vector(input))?;
        Ok(out.data.into_iter().next().unwrap_or_default())
    }

    fn check_width(&self, input: &Matrix) -> Result<()> {
        if input.cols != self.input_size() {
            return Err(NnError::InputSizeMismatch { expected: self.input_size(), actual: input.cols });
        }
        Ok(())
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut network: Network = serde_json::from_reader(reader)?;
        network.check_shapes()?;
        network.zero_grad();
        Ok(network)
    }

    /// Verifies that every layer's parameters match its declared sizes and
    /// that consecutive layers chain.
    pub fn check_shapes(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NnError::invalid_config("layers", "at least one layer is required"));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            for m in [&layer.weights, &layer.biases] {
                if !m.is_well_formed() {
                    return Err(NnError::ShapeMismatch { op: "matrix data", left: m.shape(), right: m.data_shape() });
                }
            }
            if layer.weights.shape() != (layer.input_size, layer.size) {
                return Err(NnError::ShapeMismatch {
                    op: "layer weights",
                    left: layer.weights.shape(),
                    right: (layer.input_size, layer.size),
                });
            }
            if layer.biases.shape() != (1, layer.size) {
                return Err(NnError::ShapeMismatch {
                    op: "layer biases",
                    left: layer.biases.shape(),
                    right: (1, layer.size),
                });
            }
            if i > 0 && layer.input_size != self.layers[i - 1].size {
                return Err(NnError::ShapeMismatch {
                    op: "layer chain",
                    left: (i - 1, self.layers[i - 1].size),
                    right: (i, layer.input_size),
                });
            }
        }
        Ok(())
    }
}
