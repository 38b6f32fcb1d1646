use crate::math::matrix::Matrix;

pub struct BceLoss;

/// Predictions are clipped to [EPS, 1 - EPS] before taking logs.
const EPS: f64 = 1e-7;

fn clip(p: f64) -> f64 {
    p.clamp(EPS, 1.0 - EPS)
}

impl BceLoss {
    /// Scalar BCE: -mean(y·ln(p) + (1-y)·ln(1-p))
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .zip_map(expected, |p, y| {
                let p = clip(p);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum() / n
    }

    /// Gradient of the mean: (p - y) / (p·(1 - p)) / n
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |p, y| {
            let p = clip(p);
            (p - y) / (p * (1.0 - p)) / n
        })
    }
}
