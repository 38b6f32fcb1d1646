use serde::{Serialize, Deserialize};

use crate::loss::{bce::BceLoss, mse::MseLoss};
use crate::math::matrix::Matrix;

/// Selects which loss function a training run minimizes.
///
/// - `Mse`                — Mean-squared error; pair with an Identity or Sigmoid output.
/// - `BinaryCrossEntropy` — Binary cross-entropy; pair with a Sigmoid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    BinaryCrossEntropy,
}

impl LossType {
    pub fn loss(&self, predicted: &Matrix, expected: &Matrix) -> f64 {
        match self {
            LossType::Mse                => MseLoss::loss(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::loss(predicted, expected),
        }
    }

    /// ∂loss/∂predicted, same shape as `predicted`.
    pub fn derivative(&self, predicted: &Matrix, expected: &Matrix) -> Matrix {
        match self {
            LossType::Mse                => MseLoss::derivative(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::derivative(predicted, expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&LossType::BinaryCrossEntropy).unwrap();
        assert_eq!(json, "\"binary_cross_entropy\"");
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let y = Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0]]);
        let p = Matrix::from_data(vec![vec![0.3], vec![0.6], vec![0.9]]);
        let h = 1e-6;
        for loss in [LossType::Mse, LossType::BinaryCrossEntropy] {
            let analytic = loss.derivative(&p, &y);
            for i in 0..p.rows {
                let mut up = p.clone();
                let mut down = p.clone();
                up.data[i][0] += h;
                down.data[i][0] -= h;
                let numeric = (loss.loss(&up, &y) - loss.loss(&down, &y)) / (2.0 * h);
                assert!((numeric - analytic.data[i][0]).abs() < 1e-5, "{loss:?} row {i}");
            }
        }
    }
}
