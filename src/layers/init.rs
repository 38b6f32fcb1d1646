use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Weight and bias initialization scheme for a `Dense` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// U(-1, 1) for weights and biases.
    Uniform,
    /// N(0, 1 / fan_in) weights, zero biases.
    Xavier,
    /// U(±sqrt(6 / (fan_in + fan_out))) weights, zero biases. Keras' `Dense` default.
    GlorotUniform,
    /// U(±1 / sqrt(fan_in)) for weights and biases. PyTorch's `nn.Linear` default.
    FanInUniform,
}

impl Initializer {
    /// Returns `(weights, biases)` shaped `(fan_in, fan_out)` and `(1, fan_out)`.
    pub fn init<R: Rng + ?Sized>(&self, fan_in: usize, fan_out: usize, rng: &mut R) -> (Matrix, Matrix) {
        match self {
            Initializer::Uniform => (
                Matrix::uniform(fan_in, fan_out, -1.0, 1.0, rng),
                Matrix::uniform(1, fan_out, -1.0, 1.0, rng),
            ),
            Initializer::Xavier => (
                Matrix::normal(fan_in, fan_out, (1.0 / fan_in as f64).sqrt(), rng),
                Matrix::zeros(1, fan_out),
            ),
            Initializer::GlorotUniform => {
                let limit = (6.0 / (fan_in + fan_out) as f64).sqrt();
                (
                    Matrix::uniform(fan_in, fan_out, -limit, limit, rng),
                    Matrix::zeros(1, fan_out),
                )
            }
            Initializer::FanInUniform => {
                let bound = 1.0 / (fan_in as f64).sqrt();
                (
                    Matrix::uniform(fan_in, fan_out, -bound, bound, rng),
                    Matrix::uniform(1, fan_out, -bound, bound, rng),
                )
            }
        }
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::GlorotUniform
    }
}
