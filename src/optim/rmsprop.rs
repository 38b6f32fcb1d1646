use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::optim::Optimizer;

/// RMSprop in the Keras formulation: v = ρv + (1-ρ)g², θ -= lr·g / (√v + ε).
pub struct RmsProp {
    pub learning_rate: f64,
    pub rho: f64,
    pub epsilon: f64,
    // per layer: (v_w, v_b)
    mean_square: Vec<(Matrix, Matrix)>,
}

impl RmsProp {
    pub fn new(learning_rate: f64) -> RmsProp {
        RmsProp::with_params(learning_rate, 0.9, 1e-7)
    }

    pub fn with_params(learning_rate: f64, rho: f64, epsilon: f64) -> RmsProp {
        RmsProp { learning_rate, rho, epsilon, mean_square: Vec::new() }
    }
}

impl Optimizer for RmsProp {
    fn step(&mut self, layers: &mut [Layer]) {
        let stale = self.mean_square.len() != layers.len()
            || self.mean_square.iter().zip(layers.iter()).any(|((vw, vb), l)| {
                vw.shape() != l.weights.shape() || vb.shape() != l.biases.shape()
            });
        if stale {
            self.mean_square = layers.iter()
                .map(|l| (
                    Matrix::zeros(l.weights.rows, l.weights.cols),
                    Matrix::zeros(l.biases.rows, l.biases.cols),
                ))
                .collect();
        }

        let (lr, rho, eps) = (self.learning_rate, self.rho, self.epsilon);
        let update = |param: &Matrix, grad: &Matrix, v: &mut Matrix| -> Matrix {
            *v = v.zip_map(grad, |v, g| rho * v + (1.0 - rho) * g * g);
            let step = grad.zip_map(v, |g, v| lr * g / (v.sqrt() + eps));
            param - &step
        };

        for (layer, (v_w, v_b)) in layers.iter_mut().zip(self.mean_square.iter_mut()) {
            layer.weights = update(&layer.weights, &layer.weights_grad, v_w);
            layer.biases = update(&layer.biases, &layer.biases_grad, v_b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{activation::ActivationFunction, layers::Initializer};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn first_step_is_normalized_by_running_mean_square() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut layers = vec![Layer::new(1, 1, ActivationFunction::Identity, Initializer::Xavier, &mut rng)];
        let w0 = layers[0].weights.data[0][0];
        layers[0].weights_grad = Matrix::from_data(vec![vec![5.0]]);

        RmsProp::new(0.001).step(&mut layers);

        // v = 0.1·g², so the step is lr / √0.1 regardless of |g|
        let expected = w0 - 0.001 / 0.1_f64.sqrt();
        assert!((layers[0].weights.data[0][0] - expected).abs() < 1e-6);
    }
}
