use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::init::Initializer, math::matrix::Matrix};

/// Fully connected layer: `a = act(x·W + b)` over a batch of row samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub input_size: usize,
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
    #[serde(skip)]
    pub weights_grad: Matrix,
    #[serde(skip)]
    pub biases_grad: Matrix,
    // (input x, pre-activation z) from the latest forward pass
    #[serde(skip)]
    cache: Option<(Matrix, Matrix)>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        size: usize,
        activation: ActivationFunction,
        initializer: Initializer,
        rng: &mut R,
    ) -> Layer {
        let (weights, biases) = initializer.init(input_size, size, rng);

        Layer {
            input_size,
            size,
            weights,
            biases,
            activator: activation,
            weights_grad: Matrix::zeros(input_size, size),
            biases_grad: Matrix::zeros(1, size),
            cache: None,
        }
    }

    /// Training-mode forward pass; caches `x` and `z` for `backward`.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let z = (input * &self.weights).add_row_broadcast(&self.biases);
        let a = z.map(|x| self.activator.function(x));
        self.cache = Some((input.clone(), z));
        a
    }

    /// Inference-only forward pass; leaves the cache untouched.
    pub fn infer(&self, input: &Matrix) -> Matrix {
        (input * &self.weights)
            .add_row_broadcast(&self.biases)
            .map(|x| self.activator.function(x))
    }

    /// Accumulates parameter gradients from `grad_output` (∂L/∂a) and returns
    /// ∂L/∂x for the layer below. `None` if there was no forward pass yet.
    pub fn backward(&mut self, grad_output: &Matrix) -> Option<Matrix> {
        let (input, z) = self.cache.as_ref()?;

        // δ = ∂L/∂a ⊙ σ'(z)
        let delta = grad_output.hadamard(&z.map(|x| self.activator.derivative(x)));

        let weights_step = &input.transpose() * &delta;
        let grad_input = &delta * &self.weights.transpose();

        self.ensure_grad_shapes();
        self.weights_grad = &self.weights_grad + &weights_step;
        self.biases_grad = &self.biases_grad + &delta.sum_rows();

        Some(grad_input)
    }

    pub fn zero_grad(&mut self) {
        self.weights_grad = Matrix::zeros(self.weights.rows, self.weights.cols);
        self.biases_grad = Matrix::zeros(self.biases.rows, self.biases.cols);
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    // Deserialized layers start with empty accumulators.
    fn ensure_grad_shapes(&mut self) {
        if self.weights_grad.shape() != self.weights.shape()
            || self.biases_grad.shape() != self.biases.shape()
        {
            self.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn layer(activation: ActivationFunction) -> Layer {
        let mut rng = StdRng::seed_from_u64(11);
        Layer::new(2, 3, activation, Initializer::Uniform, &mut rng)
    }

    #[test]
    fn forward_shapes_follow_batch() {
        let mut l = layer(ActivationFunction::Sigmoid);
        let x = Matrix::from_data(vec![vec![0.0, 1.0]; 4]);
        let a = l.forward(&x);
        assert_eq!(a.shape(), (4, 3));
        assert_eq!(a, l.infer(&x));
    }

    #[test]
    fn backward_without_forward_is_none() {
        let mut l = layer(ActivationFunction::Identity);
        assert!(l.backward(&Matrix::zeros(1, 3)).is_none());
    }

    #[test]
    fn gradients_accumulate_until_zeroed() {
        let mut l = layer(ActivationFunction::Identity);
        let x = Matrix::row_vector(&[1.0, 2.0]);
        let g = Matrix::row_vector(&[1.0, 1.0, 1.0]);
        l.forward(&x);
        l.backward(&g);
        l.backward(&g);
        // identity: ∂W = xᵀ·g, applied twice
        assert_eq!(l.weights_grad.data, vec![vec![2.0; 3], vec![4.0; 3]]);
        assert_eq!(l.biases_grad.data, vec![vec![2.0; 3]]);
        l.zero_grad();
        assert_eq!(l.weights_grad, Matrix::zeros(2, 3));
    }
}
