use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::optim::Optimizer;

/// Adam with bias-corrected first and second moment estimates.
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    t: i32,
    // per layer: (m_w, v_w, m_b, v_b)
    moments: Vec<[Matrix; 4]>,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam::with_params(learning_rate, 0.9, 0.999, 1e-8)
    }

    pub fn with_params(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Adam {
        Adam { learning_rate, beta1, beta2, epsilon, t: 0, moments: Vec::new() }
    }

    /// Number of steps taken so far.
    pub fn timestep(&self) -> i32 {
        self.t
    }

    fn sync_state(&mut self, layers: &[Layer]) {
        let matches = self.moments.len() == layers.len()
            && self.moments.iter().zip(layers).all(|(m, l)| {
                m[0].shape() == l.weights.shape() && m[2].shape() == l.biases.shape()
            });
        if !matches {
            self.t = 0;
            self.moments = layers.iter()
                .map(|l| {
                    let (wr, wc) = l.weights.shape();
                    let (br, bc) = l.biases.shape();
                    [Matrix::zeros(wr, wc), Matrix::zeros(wr, wc), Matrix::zeros(br, bc), Matrix::zeros(br, bc)]
                })
                .collect();
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, layers: &mut [Layer]) {
        self.sync_state(layers);
        self.t += 1;

        let (b1, b2, eps) = (self.beta1, self.beta2, self.epsilon);
        let correction1 = 1.0 - b1.powi(self.t);
        let correction2 = 1.0 - b2.powi(self.t);
        let lr = self.learning_rate;

        let update = |param: &Matrix, grad: &Matrix, m: &mut Matrix, v: &mut Matrix| -> Matrix {
            *m = m.zip_map(grad, |m, g| b1 * m + (1.0 - b1) * g);
            *v = v.zip_map(grad, |v, g| b2 * v + (1.0 - b2) * g * g);
            let step = m.zip_map(v, |m, v| lr * (m / correction1) / ((v / correction2).sqrt() + eps));
            param - &step
        };

        for (layer, [m_w, v_w, m_b, v_b]) in layers.iter_mut().zip(self.moments.iter_mut()) {
            layer.weights = update(&layer.weights, &layer.weights_grad, m_w, v_w);
            layer.biases = update(&layer.biases, &layer.biases_grad, m_b, v_b);
        }
    }
}
