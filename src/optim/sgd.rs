use crate::layers::dense::Layer;
use crate::optim::Optimizer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    /// θ -= lr · ∂θ for every weight and bias.
    fn step(&mut self, layers: &mut [Layer]) {
        let lr = self.learning_rate;
        for layer in layers {
            layer.weights = &layer.weights - &layer.weights_grad.scale(lr);
            layer.biases = &layer.biases - &layer.biases_grad.scale(lr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{activation::ActivationFunction, layers::Initializer, math::Matrix};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn step_moves_against_gradient() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layers = vec![Layer::new(1, 1, ActivationFunction::Identity, Initializer::Xavier, &mut rng)];
        let w0 = layers[0].weights.data[0][0];
        layers[0].weights_grad = Matrix::from_data(vec![vec![2.0]]);
        layers[0].biases_grad = Matrix::from_data(vec![vec![-1.0]]);
        Sgd::new(0.5).step(&mut layers);
        assert!((layers[0].weights.data[0][0] - (w0 - 1.0)).abs() < 1e-12);
        assert!((layers[0].biases.data[0][0] - 0.5).abs() < 1e-12);
    }
}
