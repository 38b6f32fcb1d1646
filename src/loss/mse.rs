use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²) over every element.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |p, y| (p - y).powi(2)).sum() / n
    }

    /// Gradient of the mean: 2(predicted - expected) / n
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |p, y| 2.0 * (p - y) / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_known_values() {
        let p = Matrix::from_data(vec![vec![1.0], vec![0.0]]);
        let y = Matrix::from_data(vec![vec![0.0], vec![0.0]]);
        assert_eq!(MseLoss::loss(&p, &y), 0.5);
        assert_eq!(MseLoss::derivative(&p, &y).data, vec![vec![1.0], vec![0.0]]);
    }
}
